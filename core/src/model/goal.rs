use serde::{Deserialize, Serialize};

/// The single active weekly target. Setting a new goal replaces the old one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Goal {
    pub goal: String,
    /// Missing in the stored blob reads as 0, which progress reports as 0%.
    #[serde(rename = "goalHours", default)]
    pub goal_hours: f64,
}

impl Goal {
    pub fn new(goal: impl Into<String>, goal_hours: f64) -> Self {
        Self {
            goal: goal.into(),
            goal_hours,
        }
    }
}
