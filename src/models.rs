//models.rs
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    /// Free-form display text, e.g. "3 sets" or "-".
    pub sets: String,
    /// Free-form display text, e.g. "8-10 reps" or "AMRAP".
    pub reps: String,
    #[serde(default)]
    pub completed: bool,
}

impl Exercise {
    pub fn new(name: &str, sets: &str, reps: &str) -> Self {
        Exercise {
            name: name.to_string(),
            sets: sets.to_string(),
            reps: reps.to_string(),
            completed: false,
        }
    }
}

/// Training emphasis of a day, used by the view for icon and color choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Strength,
    Legs,
    Cardio,
    Rest,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Stable short key ("mon".."sun"), unique within the schedule.
    pub id: String,
    pub label: String,
    pub focus: String,
    pub category: Category,
    pub exercises: Vec<Exercise>,
}

/// Exactly 7 days, Monday first. Only `completed` flags change after load.
pub type Schedule = Vec<Day>;
