//! Flat per-item penalty table from the early dashboard.
//!
//! Every item is its own bucket with a zero allowance, so each unit logged
//! costs the item's flat penalty. This keeps old logs scoreable without
//! merging the two models: a host picks one policy explicitly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::HarmLevelRule;
use crate::scoring::PenaltyPolicy;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatPenaltyTable {
    penalties: BTreeMap<String, u32>,
}

impl FlatPenaltyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dashboard's flat per-item table.
    pub fn legacy_dashboard() -> Self {
        [
            ("burger", 30),
            ("pizza", 25),
            ("fries", 20),
            ("soda", 15),
            ("candy", 20),
            ("icecream", 25),
        ]
        .into_iter()
        .collect()
    }

    pub fn with_item(mut self, item_id: impl Into<String>, penalty: u32) -> Self {
        self.penalties.insert(item_id.into(), penalty);
        self
    }

    pub fn penalty(&self, item_id: &str) -> Option<u32> {
        self.penalties.get(item_id).copied()
    }

    pub fn len(&self) -> usize {
        self.penalties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.penalties.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for FlatPenaltyTable {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self {
            penalties: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl PenaltyPolicy for FlatPenaltyTable {
    type Bucket = String;

    fn bucket_for(&self, item_id: &str) -> Option<String> {
        self.penalties.contains_key(item_id).then(|| item_id.to_string())
    }

    fn rule_for(&self, bucket: &String) -> Option<HarmLevelRule> {
        self.penalty(bucket)
            .map(|penalty| HarmLevelRule::limited(0, penalty))
    }
}
