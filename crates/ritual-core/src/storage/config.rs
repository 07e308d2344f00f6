//! TOML-based application configuration.
//!
//! Stores the scoring constants:
//! - Step rule (tiered or linear) and its thresholds
//! - Points per completed exercise
//! - The daily goal that marks a day completed
//! - Harm level allowance/penalty rules
//! - An optional catalog file replacing the built-in junk menu
//!
//! Configuration is stored at `~/.config/ritual/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::catalog::{Catalog, HarmLevelRules};
use crate::error::{ConfigError, Result};
use crate::scoring::{DailyScorer, StepScoring, WorkoutScoring};
use crate::streak::CompletionCriteria;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/ritual/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub steps: StepScoring,
    #[serde(default)]
    pub workout: WorkoutScoring,
    #[serde(default)]
    pub completion: CompletionCriteria,
    /// Junk catalog file. The built-in menu is used when unset.
    #[serde(default)]
    pub catalog_path: Option<String>,
    #[serde(default)]
    pub harm_levels: HarmLevelRules,
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    serde_json::Value::Null | serde_json::Value::String(_)
                        if Self::is_unset(value) =>
                    {
                        serde_json::Value::Null
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Values that clear an optional setting.
    fn is_unset(value: &str) -> bool {
        let value = value.trim();
        value.is_empty() || value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("null")
    }

    /// Relative catalog paths are resolved against `base`.
    fn resolve_catalog_path(path: &str, base: &Path) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                tracing::info!(path = %path.display(), "loaded configuration");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                tracing::info!(path = %path.display(), "wrote default configuration");
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Update a value by dot-separated key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// key's type.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Set a config value by key and save. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// The junk catalog scored against this config's harm level rules.
    ///
    /// # Errors
    ///
    /// Returns an error if `catalog_path` is set and the file cannot be loaded.
    /// A relative `catalog_path` is looked up in the config directory.
    pub fn catalog(&self) -> Result<Catalog> {
        let catalog = match &self.catalog_path {
            Some(path) if Path::new(path).is_absolute() => Catalog::from_path(Path::new(path))?,
            Some(path) => Catalog::from_path(&Self::resolve_catalog_path(path, &data_dir()?))?,
            None => Catalog::builtin(),
        };
        Ok(catalog.with_rules(self.harm_levels.clone()))
    }

    pub fn scorer(&self) -> DailyScorer {
        DailyScorer::new(self.steps, self.workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{HarmLevel, HarmLevelRule};
    use crate::scoring::{LinearSteps, TieredSteps};

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
        assert_eq!(parsed.harm_levels, HarmLevelRules::default());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("steps.threshold").as_deref(), Some("6000"));
        assert_eq!(cfg.get("steps.mode").as_deref(), Some("tiered"));
        assert_eq!(cfg.get("workout.points_per_exercise").as_deref(), Some("20"));
        assert!(cfg.get("steps.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "completion.min_steps", "8000").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "completion.min_steps").unwrap(),
            &serde_json::Value::Number(8000.into())
        );
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "workout.bonus", "5");
        assert!(matches!(result, Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn set_json_value_by_path_rejects_invalid_type() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "steps.point_cap", "lots");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn apply_switches_step_mode() {
        let mut cfg = Config::default();
        cfg.apply("steps.mode", "linear").unwrap();
        assert_eq!(cfg.steps, StepScoring::Linear(LinearSteps::default()));
    }

    #[test]
    fn apply_sets_catalog_path() {
        let mut cfg = Config::default();
        cfg.apply("catalog_path", "/tmp/menu.toml").unwrap();
        assert_eq!(cfg.catalog_path.as_deref(), Some("/tmp/menu.toml"));
    }

    #[test]
    fn apply_clears_catalog_path() {
        for unset in ["", "none", "NULL", "  "] {
            let mut cfg = Config::default();
            cfg.apply("catalog_path", "/tmp/menu.toml").unwrap();
            cfg.apply("catalog_path", unset).unwrap();
            assert_eq!(cfg.catalog_path, None, "value {unset:?} should clear the path");
            assert!(cfg.catalog().is_ok());
        }
    }

    #[test]
    fn apply_rejects_clearing_required_string() {
        let mut cfg = Config::default();
        assert!(cfg.apply("steps.mode", "none").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn relative_catalog_path_resolves_against_base() {
        let base = Path::new("/home/me/.config/ritual");
        assert_eq!(
            Config::resolve_catalog_path("menu.toml", base),
            base.join("menu.toml")
        );
        assert_eq!(
            Config::resolve_catalog_path("/srv/menu.toml", base),
            PathBuf::from("/srv/menu.toml")
        );
    }

    #[test]
    fn apply_replaces_harm_levels_from_json() {
        let mut cfg = Config::default();
        cfg.apply(
            "harm_levels",
            r#"[{"harm_level": 3, "free_allowance": 0, "penalty_per_unit": 40}]"#,
        )
        .unwrap();
        assert_eq!(cfg.harm_levels.len(), 1);
        assert_eq!(
            cfg.harm_levels.get(HarmLevel::HIGH),
            Some(&HarmLevelRule::limited(0, 40))
        );
    }

    #[test]
    fn apply_leaves_config_untouched_on_error() {
        let mut cfg = Config::default();
        assert!(cfg.apply("steps.threshold", "-5").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn scorer_reflects_step_settings() {
        let cfg = Config {
            steps: StepScoring::Tiered(TieredSteps {
                threshold: 4_000,
                ..TieredSteps::default()
            }),
            ..Config::default()
        };
        assert_eq!(cfg.scorer().steps().points(4_000), 30);
    }

    #[test]
    fn catalog_uses_configured_rules() {
        let cfg = Config {
            harm_levels: HarmLevelRules::empty(),
            ..Config::default()
        };
        let catalog = cfg.catalog().unwrap();
        assert!(catalog.rules().is_empty());
        assert!(catalog.get("kulfi").is_some());
    }
}
