//! Junk food catalog commands.

use clap::Subcommand;
use serde::Serialize;

use ritual_core::{Config, HarmLevel, HarmLevelRule};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List catalog items
    List {
        /// Only items at this harm level (0-3)
        #[arg(long, value_parser = parse_level)]
        harm_level: Option<HarmLevel>,
    },
    /// Show a single item
    Show {
        /// Item id (e.g. "regular_coke")
        id: String,
    },
    /// Print the per-level penalty rules in effect
    Rules,
}

#[derive(Serialize)]
struct RuleView {
    harm_level: HarmLevel,
    label: &'static str,
    description: &'static str,
    #[serde(flatten)]
    rule: HarmLevelRule,
}

fn parse_level(value: &str) -> Result<HarmLevel, String> {
    let raw: u8 = value
        .parse()
        .map_err(|_| format!("invalid harm level '{value}'"))?;
    HarmLevel::try_from(raw).map_err(|e| e.to_string())
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Config::load()?.catalog()?;
    match action {
        CatalogAction::List { harm_level } => {
            let items: Vec<_> = match harm_level {
                Some(level) => catalog.items_at(level).collect(),
                None => catalog.items().iter().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        CatalogAction::Show { id } => match catalog.get(&id) {
            Some(item) => println!("{}", serde_json::to_string_pretty(item)?),
            None => return Err(format!("unknown item: {id}").into()),
        },
        CatalogAction::Rules => {
            let rules: Vec<RuleView> = catalog
                .rules()
                .iter()
                .map(|(harm_level, rule)| RuleView {
                    harm_level,
                    label: harm_level.label(),
                    description: harm_level.description(),
                    rule: *rule,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harm_level_argument() {
        assert_eq!(parse_level("3").unwrap(), HarmLevel::HIGH);
        assert!(parse_level("4").is_err());
        assert!(parse_level("high").is_err());
    }
}
