use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::mood::Mood;
use crate::model::pet_action::PetAction;

pub const STAT_MIN: f64 = 0.0;
pub const STAT_MAX: f64 = 10.0;

/// The complete persisted state of one pet.
///
/// Every field is required on load. Unknown fields in the stored JSON are
/// ignored so newer files still open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetRecord {
    pub name: String,
    pub hunger: f64,
    pub happiness: f64,
    pub health: f64,

    /// Days
    pub age: u32,

    pub last_fed: NaiveDateTime,
    pub last_played: NaiveDateTime,
    pub last_slept: NaiveDateTime,
}

impl PetRecord {
    pub fn new(name: impl Into<String>, now: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            hunger: 0.0,
            happiness: 10.0,
            health: 10.0,
            age: 0,
            last_fed: now,
            last_played: now,
            last_slept: now,
        }
    }

    /// First match wins: hunger, then happiness, then health.
    pub fn mood(&self) -> Mood {
        if self.hunger > 7.0 {
            Mood::Hungry
        } else if self.happiness > 7.0 {
            Mood::Happy
        } else if self.health < 5.0 {
            Mood::Sick
        } else {
            Mood::Neutral
        }
    }

    /// Timestamp the cooldown of `action` is measured from.
    pub fn last_action_at(&self, action: PetAction) -> Option<NaiveDateTime> {
        match action {
            PetAction::Feed => Some(self.last_fed),
            PetAction::Play => Some(self.last_played),
            PetAction::Sleep => Some(self.last_slept),
            PetAction::Age => None,
        }
    }

    pub(crate) fn touch(&mut self, action: PetAction, now: NaiveDateTime) {
        match action {
            PetAction::Feed => self.last_fed = now,
            PetAction::Play => self.last_played = now,
            PetAction::Sleep => self.last_slept = now,
            PetAction::Age => {}
        }
    }

    pub fn clamp_stats(&mut self) {
        self.hunger = clamp_stat(self.hunger);
        self.happiness = clamp_stat(self.happiness);
        self.health = clamp_stat(self.health);
    }

    /// A stored record with a blank name is treated as no record at all.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

pub fn clamp_stat(value: f64) -> f64 {
    value.clamp(STAT_MIN, STAT_MAX)
}
