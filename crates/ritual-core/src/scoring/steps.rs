//! Step count scoring.
//!
//! The tiered rule is canonical: nothing below the threshold, base points at
//! the threshold, a fixed bonus per full increment above it, with both steps
//! and points capped. The linear rule is the older "10 points per 1,000
//! steps" formula and stays selectable through configuration.

use serde::{Deserialize, Serialize};

/// Tiered step rule constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredSteps {
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    #[serde(default = "default_base_points")]
    pub base_points: u32,
    #[serde(default = "default_increment_steps")]
    pub increment_steps: u32,
    #[serde(default = "default_increment_points")]
    pub increment_points: u32,
    /// Steps beyond this count earn nothing extra.
    #[serde(default = "default_step_cap")]
    pub step_cap: u32,
    #[serde(default = "default_point_cap")]
    pub point_cap: u32,
}

fn default_threshold() -> u32 {
    6_000
}
fn default_base_points() -> u32 {
    30
}
fn default_increment_steps() -> u32 {
    1_000
}
fn default_increment_points() -> u32 {
    5
}
fn default_step_cap() -> u32 {
    10_000
}
fn default_point_cap() -> u32 {
    50
}

impl Default for TieredSteps {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            base_points: default_base_points(),
            increment_steps: default_increment_steps(),
            increment_points: default_increment_points(),
            step_cap: default_step_cap(),
            point_cap: default_point_cap(),
        }
    }
}

impl TieredSteps {
    pub fn points(&self, steps: u32) -> u32 {
        if steps < self.threshold {
            return 0;
        }
        let counted = steps.min(self.step_cap).saturating_sub(self.threshold);
        let increments = counted.checked_div(self.increment_steps).unwrap_or(0);
        self.base_points
            .saturating_add(increments.saturating_mul(self.increment_points))
            .min(self.point_cap)
    }
}

/// Uncapped linear step rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearSteps {
    #[serde(default = "default_increment_steps")]
    pub per_steps: u32,
    #[serde(default = "default_linear_points")]
    pub points: u32,
}

fn default_linear_points() -> u32 {
    10
}

impl Default for LinearSteps {
    fn default() -> Self {
        Self {
            per_steps: default_increment_steps(),
            points: default_linear_points(),
        }
    }
}

impl LinearSteps {
    pub fn points(&self, steps: u32) -> u32 {
        steps
            .checked_div(self.per_steps)
            .unwrap_or(0)
            .saturating_mul(self.points)
    }
}

/// Which step rule is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StepScoring {
    Tiered(TieredSteps),
    Linear(LinearSteps),
}

impl Default for StepScoring {
    fn default() -> Self {
        StepScoring::Tiered(TieredSteps::default())
    }
}

impl StepScoring {
    pub fn points(&self, steps: u32) -> u32 {
        match self {
            StepScoring::Tiered(rule) => rule.points(steps),
            StepScoring::Linear(rule) => rule.points(steps),
        }
    }
}

/// Points for a step count under the canonical tiered rule.
pub fn step_points(steps: u32) -> u32 {
    TieredSteps::default().points(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_scores_nothing() {
        assert_eq!(step_points(0), 0);
        assert_eq!(step_points(5_999), 0);
    }

    #[test]
    fn threshold_awards_base_points() {
        assert_eq!(step_points(6_000), 30);
        assert_eq!(step_points(6_999), 30);
    }

    #[test]
    fn each_full_thousand_adds_five() {
        assert_eq!(step_points(7_000), 35);
        assert_eq!(step_points(8_500), 40);
        assert_eq!(step_points(9_999), 45);
    }

    #[test]
    fn capped_at_fifty() {
        assert_eq!(step_points(10_000), 50);
        assert_eq!(step_points(50_000), 50);
        assert_eq!(step_points(u32::MAX), 50);
    }

    #[test]
    fn point_cap_applies_with_generous_increments() {
        let rule = TieredSteps {
            increment_points: 15,
            ..TieredSteps::default()
        };
        assert_eq!(rule.points(8_000), 50);
    }

    #[test]
    fn zero_increment_size_awards_base_only() {
        let rule = TieredSteps {
            increment_steps: 0,
            ..TieredSteps::default()
        };
        assert_eq!(rule.points(9_000), 30);
    }

    #[test]
    fn linear_rule_is_uncapped() {
        let rule = StepScoring::Linear(LinearSteps::default());
        assert_eq!(rule.points(999), 0);
        assert_eq!(rule.points(4_500), 40);
        assert_eq!(rule.points(25_000), 250);
    }

    #[test]
    fn mode_tag_round_trips_through_toml() {
        let text = "mode = \"linear\"\nper_steps = 500\npoints = 3\n";
        let parsed: StepScoring = toml::from_str(text).unwrap();
        assert_eq!(
            parsed,
            StepScoring::Linear(LinearSteps {
                per_steps: 500,
                points: 3
            })
        );

        let tiered: StepScoring = toml::from_str("mode = \"tiered\"").unwrap();
        assert_eq!(tiered, StepScoring::default());
    }
}
