//! A single virtual pet whose stats change through timed actions and are
//! kept in a JSON file between sessions.

pub mod engine;
pub mod error;
pub mod model;
pub mod settings;
pub mod settings_io;

pub use engine::apply_action::{apply_action, remaining_cooldown};
pub use engine::clock::{Clock, ManualClock, SystemClock};
pub use engine::pet::VirtualPet;
pub use engine::store::{JsonFileStore, MemoryStore, PetStore};
pub use error::{PetError, StoreError};
pub use model::action_result::ActionOutcome;
pub use model::mood::Mood;
pub use model::pet_action::PetAction;
pub use model::pet_record::PetRecord;
pub use model::pet_status::PetStatus;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
