//! Junk food penalty calculation.
//!
//! Logged quantities are pooled per bucket for the whole day before the free
//! allowance is applied. With the canonical catalog the bucket is the item's
//! harm level, so two different level-2 items draw from the same allowance as
//! one item logged twice.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

use crate::catalog::{Catalog, HarmLevel, HarmLevelRule, HarmLevelRules};

/// One logged junk food intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JunkLogEntry {
    pub item_id: String,
    pub quantity: u32,
    pub timestamp: NaiveDateTime,
}

impl JunkLogEntry {
    pub fn new(item_id: impl Into<String>, quantity: u32, timestamp: NaiveDateTime) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            timestamp,
        }
    }

    /// The day this entry counts towards.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Decides how logged items are pooled and which rule applies to each pool.
pub trait PenaltyPolicy {
    type Bucket: Ord + Clone + Debug + Display;

    /// Bucket an item belongs to, or `None` if the item is unknown.
    fn bucket_for(&self, item_id: &str) -> Option<Self::Bucket>;

    /// Rule for a bucket, or `None` if the bucket is unruled.
    fn rule_for(&self, bucket: &Self::Bucket) -> Option<HarmLevelRule>;
}

/// Harm-level pooling against an explicit rule table.
#[derive(Debug, Clone, Copy)]
pub struct HarmLevelPolicy<'a> {
    pub catalog: &'a Catalog,
    pub rules: &'a HarmLevelRules,
}

impl<'a> HarmLevelPolicy<'a> {
    pub fn new(catalog: &'a Catalog, rules: &'a HarmLevelRules) -> Self {
        Self { catalog, rules }
    }
}

impl PenaltyPolicy for HarmLevelPolicy<'_> {
    type Bucket = HarmLevel;

    fn bucket_for(&self, item_id: &str) -> Option<HarmLevel> {
        self.catalog.get(item_id).map(|item| item.harm_level)
    }

    fn rule_for(&self, bucket: &HarmLevel) -> Option<HarmLevelRule> {
        self.rules.get(*bucket).copied()
    }
}

/// A catalog scores against its own rule table.
impl PenaltyPolicy for Catalog {
    type Bucket = HarmLevel;

    fn bucket_for(&self, item_id: &str) -> Option<HarmLevel> {
        self.get(item_id).map(|item| item.harm_level)
    }

    fn rule_for(&self, bucket: &HarmLevel) -> Option<HarmLevelRule> {
        self.rules().get(*bucket).copied()
    }
}

/// Penalty detail for one bucket on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketPenalty<B> {
    pub bucket: B,
    /// Total units logged in this bucket for the day.
    pub units: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_allowance: Option<u32>,
    pub extra_units: u64,
    pub penalty: u64,
}

/// Per-bucket penalty breakdown for `day`.
///
/// Entries on other days and items the policy cannot resolve are ignored, as
/// are buckets without a rule. Buckets are returned in ascending order.
pub fn junk_penalty_detail<P: PenaltyPolicy>(
    entries: &[JunkLogEntry],
    day: NaiveDate,
    policy: &P,
) -> Vec<BucketPenalty<P::Bucket>> {
    let mut counts: BTreeMap<P::Bucket, u64> = BTreeMap::new();

    for entry in entries.iter().filter(|e| e.day() == day) {
        match policy.bucket_for(&entry.item_id) {
            Some(bucket) => {
                *counts.entry(bucket).or_insert(0) += u64::from(entry.quantity);
            }
            None => {
                tracing::debug!(item_id = %entry.item_id, "skipping unknown junk item");
            }
        }
    }

    counts
        .into_iter()
        .filter_map(|(bucket, units)| {
            let Some(rule) = policy.rule_for(&bucket) else {
                tracing::debug!(bucket = %bucket, units, "no penalty rule for bucket");
                return None;
            };
            Some(BucketPenalty {
                units,
                free_allowance: rule.free_allowance,
                extra_units: rule.extra_units(units),
                penalty: rule.penalty_for(units),
                bucket,
            })
        })
        .collect()
}

/// Total penalty for `day` under any pooling policy.
pub fn junk_penalty_with<P: PenaltyPolicy>(
    entries: &[JunkLogEntry],
    day: NaiveDate,
    policy: &P,
) -> u32 {
    let total = junk_penalty_detail(entries, day, policy)
        .iter()
        .fold(0u64, |sum, bucket| sum.saturating_add(bucket.penalty));
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// Total penalty for `day`, pooling by harm level against `rules`.
pub fn junk_penalty(
    entries: &[JunkLogEntry],
    day: NaiveDate,
    catalog: &Catalog,
    rules: &HarmLevelRules,
) -> u32 {
    junk_penalty_with(entries, day, &HarmLevelPolicy::new(catalog, rules))
}
