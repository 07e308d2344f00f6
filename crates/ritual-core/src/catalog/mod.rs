//! Junk food catalog and harm-level rules.
//!
//! The catalog is reference data: loaded once at startup (built-in menu or a
//! TOML file) and never mutated afterwards. It is `Send + Sync`, so hosts that
//! score many users concurrently share one instance behind an `Arc`.
//!
//! Catalog file format:
//!
//! ```toml
//! [[items]]
//! id = "kulfi"
//! name = "Kulfi"
//! category = "Dessert"
//! harm_level = 1
//!
//! [[rules]]
//! harm_level = 1
//! free_allowance = 2
//! penalty_per_unit = 10
//! ```
//!
//! `rules` is optional and falls back to [`HarmLevelRules::default`].

mod builtin;
mod harm;
mod legacy;

pub use harm::{HarmLevel, HarmLevelRule, HarmLevelRuleEntry, HarmLevelRules};
pub use legacy::FlatPenaltyTable;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// A junk food item the user can log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JunkCatalogItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub harm_level: HarmLevel,
    /// Informational metadata below; never read by scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub harmful_components: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub beneficial_components: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl JunkCatalogItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        harm_level: HarmLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            harm_level,
            allowed_frequency: None,
            harmful_components: Vec::new(),
            beneficial_components: Vec::new(),
            reason: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<JunkCatalogItem>,
    #[serde(default)]
    rules: Option<HarmLevelRules>,
}

/// Immutable item lookup plus the rule table items are scored against.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<JunkCatalogItem>,
    index: HashMap<String, usize>,
    rules: HarmLevelRules,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate item ids.
    pub fn new(items: Vec<JunkCatalogItem>, rules: HarmLevelRules) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }
        Ok(Self {
            items,
            index,
            rules,
        })
    }

    /// The built-in junk menu with the default rule table.
    pub fn builtin() -> Self {
        let items = builtin::junk_menu();
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id.clone(), position))
            .collect();
        Self {
            items,
            index,
            rules: HarmLevelRules::default(),
        }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let rules = file.rules.unwrap_or_default();
        Ok(Self::new(file.items, rules)?)
    }

    /// Load a catalog file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_toml_str(&content).map_err(|e| CatalogError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!(
            path = %path.display(),
            items = catalog.len(),
            "loaded junk catalog"
        );
        Ok(catalog)
    }

    /// Replace the rule table, keeping the items.
    pub fn with_rules(mut self, rules: HarmLevelRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn get(&self, id: &str) -> Option<&JunkCatalogItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    /// Items in load order.
    pub fn items(&self) -> &[JunkCatalogItem] {
        &self.items
    }

    pub fn items_at(&self, level: HarmLevel) -> impl Iterator<Item = &JunkCatalogItem> {
        self.items.iter().filter(move |item| item.harm_level == level)
    }

    pub fn rules(&self) -> &HarmLevelRules {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
