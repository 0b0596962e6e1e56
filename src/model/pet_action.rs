use chrono::Duration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetAction {
    Feed,
    Play,
    Sleep,
    Age,
}

impl PetAction {
    pub const ALL: [PetAction; 4] = [
        PetAction::Feed,
        PetAction::Play,
        PetAction::Sleep,
        PetAction::Age,
    ];

    /// Minimum time between two successful invocations. Aging is ungated.
    pub fn cooldown(&self) -> Option<Duration> {
        match self {
            PetAction::Feed => Some(Duration::hours(2)),
            PetAction::Play => Some(Duration::hours(1)),
            PetAction::Sleep => Some(Duration::hours(8)),
            PetAction::Age => None,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            PetAction::Feed => "Feed",
            PetAction::Play => "Play",
            PetAction::Sleep => "Sleep",
            PetAction::Age => "Age",
        }
    }
}
