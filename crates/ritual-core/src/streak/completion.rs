//! Daily goal definition used to mark a day completed.

use serde::{Deserialize, Serialize};

/// A day counts towards the streak when both goals are met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCriteria {
    #[serde(default = "default_min_steps")]
    pub min_steps: u32,
    #[serde(default = "default_min_exercises")]
    pub min_exercises: u32,
}

fn default_min_steps() -> u32 {
    10_000
}
fn default_min_exercises() -> u32 {
    1
}

impl Default for CompletionCriteria {
    fn default() -> Self {
        Self {
            min_steps: default_min_steps(),
            min_exercises: default_min_exercises(),
        }
    }
}

impl CompletionCriteria {
    pub fn is_completed(&self, steps: u32, completed_exercises: u32) -> bool {
        steps >= self.min_steps && completed_exercises >= self.min_exercises
    }
}
