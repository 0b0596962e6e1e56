use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived from the current stats, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Hungry,
    Happy,
    Sick,
    Neutral,
}

impl Mood {
    pub fn short_name(&self) -> &'static str {
        match self {
            Mood::Hungry => "Hungry",
            Mood::Happy => "Happy",
            Mood::Sick => "Sick",
            Mood::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
