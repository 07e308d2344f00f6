//! Workout completion scoring.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutScoring {
    #[serde(default = "default_points_per_exercise")]
    pub points_per_exercise: u32,
}

fn default_points_per_exercise() -> u32 {
    20
}

impl Default for WorkoutScoring {
    fn default() -> Self {
        Self {
            points_per_exercise: default_points_per_exercise(),
        }
    }
}

impl WorkoutScoring {
    pub fn points(&self, completed: u32) -> u32 {
        completed.saturating_mul(self.points_per_exercise)
    }
}

/// Flat 20 points per completed exercise.
pub fn workout_points(completed: u32) -> u32 {
    WorkoutScoring::default().points(completed)
}
