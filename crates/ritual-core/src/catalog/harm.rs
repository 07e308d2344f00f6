//! Harm levels and the allowance/penalty rule attached to each level.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CatalogError, ValidationError};

/// Nutritional risk class of a catalog item, 0 (least harmful) to 3 (most).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HarmLevel(u8);

impl HarmLevel {
    pub const LEAST: HarmLevel = HarmLevel(0);
    pub const MILD: HarmLevel = HarmLevel(1);
    pub const MODERATE: HarmLevel = HarmLevel(2);
    pub const HIGH: HarmLevel = HarmLevel(3);

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Least Harmful",
            1 => "Mildly Harmful",
            2 => "Moderately Harmful",
            _ => "Highly Harmful",
        }
    }

    pub fn description(self) -> &'static str {
        match self.0 {
            0 => "Whole or minimally processed foods with low oil and sugar",
            1 => "Refined carbs or fats present, acceptable in moderation",
            2 => "Fried, sugary, or high-fat foods requiring restriction",
            _ => "Ultra-processed foods, liquid sugar, trans fats, palm oil",
        }
    }
}

impl TryFrom<u8> for HarmLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 3 {
            Ok(HarmLevel(value))
        } else {
            Err(ValidationError::HarmLevelOutOfRange(value))
        }
    }
}

impl From<HarmLevel> for u8 {
    fn from(level: HarmLevel) -> Self {
        level.0
    }
}

impl fmt::Display for HarmLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Daily allowance and per-unit penalty for one bucket of junk items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmLevelRule {
    /// Units permitted per day before penalties apply. `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_allowance: Option<u32>,
    /// Points deducted per unit beyond the allowance.
    pub penalty_per_unit: u32,
}

impl HarmLevelRule {
    pub const fn limited(free_allowance: u32, penalty_per_unit: u32) -> Self {
        Self {
            free_allowance: Some(free_allowance),
            penalty_per_unit,
        }
    }

    pub const fn unbounded() -> Self {
        Self {
            free_allowance: None,
            penalty_per_unit: 0,
        }
    }

    /// Units beyond the allowance for a pooled daily count.
    pub fn extra_units(&self, count: u64) -> u64 {
        match self.free_allowance {
            Some(allowance) => count.saturating_sub(u64::from(allowance)),
            None => 0,
        }
    }

    /// Penalty for a pooled daily count.
    pub fn penalty_for(&self, count: u64) -> u64 {
        self.extra_units(count)
            .saturating_mul(u64::from(self.penalty_per_unit))
    }
}

/// Serialized form of a single rule, keyed by its harm level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmLevelRuleEntry {
    pub harm_level: HarmLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_allowance: Option<u32>,
    pub penalty_per_unit: u32,
}

/// Rule table keyed by harm level.
///
/// Serialized as a list of [`HarmLevelRuleEntry`] so that TOML files read as
/// `[[harm_levels]]` tables. A level without an entry has no rule, and items at
/// that level never incur a penalty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HarmLevelRuleEntry>", into = "Vec<HarmLevelRuleEntry>")]
pub struct HarmLevelRules {
    rules: BTreeMap<HarmLevel, HarmLevelRule>,
}

impl HarmLevelRules {
    /// An empty table: every level is unruled.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    pub fn get(&self, level: HarmLevel) -> Option<&HarmLevelRule> {
        self.rules.get(&level)
    }

    /// Builder-style insert, replacing any existing rule for the level.
    pub fn with_rule(mut self, level: HarmLevel, rule: HarmLevelRule) -> Self {
        self.rules.insert(level, rule);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (HarmLevel, &HarmLevelRule)> {
        self.rules.iter().map(|(level, rule)| (*level, rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for HarmLevelRules {
    fn default() -> Self {
        Self::empty()
            .with_rule(HarmLevel::LEAST, HarmLevelRule::unbounded())
            .with_rule(HarmLevel::MILD, HarmLevelRule::limited(2, 10))
            .with_rule(HarmLevel::MODERATE, HarmLevelRule::limited(1, 20))
            .with_rule(HarmLevel::HIGH, HarmLevelRule::limited(1, 30))
    }
}

impl TryFrom<Vec<HarmLevelRuleEntry>> for HarmLevelRules {
    type Error = CatalogError;

    fn try_from(entries: Vec<HarmLevelRuleEntry>) -> Result<Self, Self::Error> {
        let mut rules = BTreeMap::new();
        for entry in entries {
            let rule = HarmLevelRule {
                free_allowance: entry.free_allowance,
                penalty_per_unit: entry.penalty_per_unit,
            };
            if rules.insert(entry.harm_level, rule).is_some() {
                return Err(CatalogError::DuplicateRule(entry.harm_level.value()));
            }
        }
        Ok(Self { rules })
    }
}

impl From<HarmLevelRules> for Vec<HarmLevelRuleEntry> {
    fn from(table: HarmLevelRules) -> Self {
        table
            .rules
            .into_iter()
            .map(|(harm_level, rule)| HarmLevelRuleEntry {
                harm_level,
                free_allowance: rule.free_allowance,
                penalty_per_unit: rule.penalty_per_unit,
            })
            .collect()
    }
}
