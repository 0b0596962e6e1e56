use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::model::pet_record::PetRecord;

/// Where a single pet record lives between sessions.
pub trait PetStore {
    /// `Ok(None)` when there is no usable record, including corrupt data.
    fn load(&self) -> Result<Option<PetRecord>, StoreError>;

    /// Overwrites whatever was stored before.
    fn save(&mut self, record: &PetRecord) -> Result<(), StoreError>;

    /// Human-readable location for logs.
    fn location(&self) -> String;
}

impl<S: PetStore + ?Sized> PetStore for &mut S {
    fn load(&self) -> Result<Option<PetRecord>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, record: &PetRecord) -> Result<(), StoreError> {
        (**self).save(record)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/* =========================
   JSON file
   ========================= */

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PetStore for JsonFileStore {
    fn load(&self) -> Result<Option<PetRecord>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no pet file yet");
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str::<PetRecord>(&text) {
            Ok(record) if record.is_valid() => {
                debug!(path = %self.path.display(), pet = %record.name, "loaded pet");
                Ok(Some(record))
            }
            Ok(_) => {
                warn!(path = %self.path.display(), "pet file has a blank name, ignoring it");
                Ok(None)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "pet file is unreadable, ignoring it");
                Ok(None)
            }
        }
    }

    fn save(&mut self, record: &PetRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "{}'s data has been saved.", record.name);
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/* =========================
   In memory
   ========================= */

/// Keeps the record in memory and counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<PetRecord>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: PetRecord) -> Self {
        Self {
            record: Some(record),
            saves: 0,
        }
    }

    pub fn record(&self) -> Option<&PetRecord> {
        self.record.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl PetStore for MemoryStore {
    fn load(&self) -> Result<Option<PetRecord>, StoreError> {
        Ok(self.record.clone().filter(PetRecord::is_valid))
    }

    fn save(&mut self, record: &PetRecord) -> Result<(), StoreError> {
        self.record = Some(record.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
