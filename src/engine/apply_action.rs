use chrono::{Duration, NaiveDateTime};

use crate::model::action_result::ActionOutcome;
use crate::model::pet_action::PetAction;
use crate::model::pet_record::PetRecord;

/// Apply `action` to the record at time `now`, returning the outcome.
///
/// Gated actions only run once their cooldown has fully elapsed since the
/// matching `last_*` timestamp. A rejected action leaves the record untouched.
/// Stats are saturated into range after every change.
pub fn apply_action(record: &mut PetRecord, action: PetAction, now: NaiveDateTime) -> ActionOutcome {
    if let Some(remaining) = remaining_cooldown(record, action, now) {
        return ActionOutcome::TooSoon { remaining };
    }

    match action {
        PetAction::Feed => {
            record.hunger -= 1.0;
            record.health += 1.0;
        }

        PetAction::Play => {
            record.happiness += 1.0;
            record.health += 0.5;
        }

        PetAction::Sleep => {
            record.hunger += 1.0;
            record.health += 2.0;
        }

        PetAction::Age => {
            record.age = record.age.saturating_add(1);
            record.hunger += 1.0;
            record.health -= 0.5;
        }
    }

    record.clamp_stats();
    record.touch(action, now);

    ActionOutcome::Applied
}

/// Time left before `action` is allowed again, or `None` if it is allowed now.
pub fn remaining_cooldown(record: &PetRecord, action: PetAction, now: NaiveDateTime) -> Option<Duration> {
    let cooldown = action.cooldown()?;
    let last = record.last_action_at(action)?;
    let elapsed = now.signed_duration_since(last);

    if elapsed >= cooldown {
        None
    } else {
        Some(cooldown - elapsed)
    }
}
