use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::settings::PetSettings;

pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("vpet");
    path.push("settings.json");
    path
}

pub fn load_settings() -> PetSettings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &PetSettings) -> anyhow::Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// Missing or malformed settings fall back to the defaults.
pub fn load_settings_from(path: &Path) -> PetSettings {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| match serde_json::from_str(&s) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed settings");
                None
            }
        })
        .unwrap_or_default()
}

pub fn save_settings_to(path: &Path, settings: &PetSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
