use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::engine::apply_action::apply_action;
use crate::engine::clock::{Clock, SystemClock};
use crate::engine::store::{JsonFileStore, PetStore};
use crate::error::PetError;
use crate::model::action_result::ActionOutcome;
use crate::model::pet_action::PetAction;
use crate::model::pet_record::PetRecord;
use crate::model::pet_status::PetStatus;

/// One session over one stored pet.
///
/// The session owns its store for its lifetime. Every action taken on an
/// existing pet ends with a save, including actions rejected by their
/// cooldown, so the number of writes always equals the number of calls.
pub struct VirtualPet<S, C> {
    store: S,
    clock: C,
    name: Option<String>,
    record: Option<PetRecord>,
}

impl VirtualPet<JsonFileStore, SystemClock> {
    /// Open (or, given a name, create) the pet stored at `path`.
    pub fn open_file(path: impl Into<PathBuf>, name: Option<String>) -> Result<Self, PetError> {
        Self::open(JsonFileStore::new(path), SystemClock, name)
    }
}

impl<S: PetStore, C: Clock> VirtualPet<S, C> {
    /// Load the stored pet. When nothing usable is stored and `name` is
    /// given, a new pet is created and saved right away.
    pub fn open(store: S, clock: C, name: Option<String>) -> Result<Self, PetError> {
        let record = store.load()?;

        let mut pet = Self {
            store,
            clock,
            name,
            record,
        };

        if pet.record.is_none() && pet.name.is_some() {
            pet.create()?;
        }

        Ok(pet)
    }

    pub fn create(&mut self) -> Result<(), PetError> {
        if self.record.is_some() {
            warn!(location = %self.store.location(), "pet already exists");
            return Err(PetError::AlreadyExists);
        }

        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(PetError::MissingName)?;

        let record = PetRecord::new(name, self.clock.now());
        self.store.save(&record)?;
        info!(pet = %record.name, location = %self.store.location(), "{} has been created!", record.name);

        self.record = Some(record);
        Ok(())
    }

    pub fn status(&self) -> Result<PetStatus, PetError> {
        self.record
            .as_ref()
            .map(PetStatus::from)
            .ok_or(PetError::NotFound)
    }

    pub fn feed(&mut self) -> Result<ActionOutcome, PetError> {
        self.perform(PetAction::Feed)
    }

    pub fn play(&mut self) -> Result<ActionOutcome, PetError> {
        self.perform(PetAction::Play)
    }

    pub fn sleep(&mut self) -> Result<ActionOutcome, PetError> {
        self.perform(PetAction::Sleep)
    }

    pub fn age_pet(&mut self) -> Result<ActionOutcome, PetError> {
        self.perform(PetAction::Age)
    }

    /// Run `action` and persist the record whatever the outcome.
    /// Without a pet nothing happens and nothing is saved.
    pub fn perform(&mut self, action: PetAction) -> Result<ActionOutcome, PetError> {
        let now = self.clock.now();
        let record = self.record.as_mut().ok_or(PetError::NotFound)?;

        let outcome = apply_action(record, action, now);
        match &outcome {
            ActionOutcome::Applied => {
                info!(pet = %record.name, action = action.short_name(), "{}", outcome.describe(&record.name, action));
            }
            ActionOutcome::TooSoon { remaining } => {
                debug!(
                    pet = %record.name,
                    action = action.short_name(),
                    remaining_secs = remaining.num_seconds(),
                    "{}",
                    outcome.describe(&record.name, action)
                );
            }
        }

        self.store.save(record)?;
        Ok(outcome)
    }

    pub fn record(&self) -> Option<&PetRecord> {
        self.record.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.record
            .as_ref()
            .map(|r| r.name.as_str())
            .or(self.name.as_deref())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
