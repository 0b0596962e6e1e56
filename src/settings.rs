use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PetSettings {
    /// JSON file holding the pet record
    pub pet_file: PathBuf,

    /// Name used to create a pet when the file holds none
    pub pet_name: Option<String>,

    pub ui_scale: f32,

    // trace | debug | info | warn | error
    pub log_level: String,
}

impl Default for PetSettings {
    fn default() -> Self {
        Self {
            pet_file: default_pet_file(),
            pet_name: None,
            ui_scale: 1.0,
            log_level: "info".into(),
        }
    }
}

impl PetSettings {
    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

fn default_pet_file() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("vpet");
    path.push("pet.json");
    path
}
