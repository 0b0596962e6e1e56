use chrono::Duration;

use crate::model::pet_action::PetAction;

/// Result of a gated action on an existing pet.
///
/// `TooSoon` is not an error: the call succeeded, nothing changed, and the
/// record was still saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    TooSoon { remaining: Duration },
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }

    pub fn describe(&self, pet_name: &str, action: PetAction) -> String {
        match (self, action) {
            (ActionOutcome::Applied, PetAction::Feed) => format!("{pet_name} has been fed!"),
            (ActionOutcome::Applied, PetAction::Play) => format!("{pet_name} enjoyed playing!"),
            (ActionOutcome::Applied, PetAction::Sleep) => {
                format!("{pet_name} had a restful sleep!")
            }
            (ActionOutcome::Applied, PetAction::Age) => {
                format!("{pet_name} has aged by 1 day!")
            }
            (ActionOutcome::TooSoon { .. }, PetAction::Feed) => {
                "It's too soon to feed again. Try later.".to_string()
            }
            (ActionOutcome::TooSoon { .. }, PetAction::Play) => {
                "Your pet needs some rest. Try playing later.".to_string()
            }
            (ActionOutcome::TooSoon { .. }, PetAction::Sleep) => {
                "Your pet isn't tired yet.".to_string()
            }
            // aging has no cooldown, kept for exhaustiveness
            (ActionOutcome::TooSoon { .. }, PetAction::Age) => {
                format!("{pet_name} can't age yet.")
            }
        }
    }
}
