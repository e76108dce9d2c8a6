use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::model::SettingsData;
use crate::errors::SettingsError;

/// How the settings in a [`SettingsLoad`] were obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsLoadStatus {
    Loaded,
    /// No settings file yet; defaults are in use.
    Missing,
    /// The file was unreadable as a whole or some fields were rejected.
    /// Whatever could be decoded is kept.
    Invalid(String),
}

/// Settings read from disk together with their load status.
#[derive(Debug, Clone)]
pub struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    pub fn new(settings: SettingsData, status: SettingsLoadStatus) -> Self {
        Self { settings, status }
    }

    pub fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

/// Load `$HOME/.config/navrail/settings.json`.
pub fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

/// Save to `$HOME/.config/navrail/settings.json`.
pub fn save_settings(settings: &SettingsData) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

/// Load settings from `path`.
///
/// Only IO failures other than a missing file are errors; malformed
/// content degrades to [`SettingsLoadStatus::Invalid`].
pub fn load_settings_from_path(
    path: &Path,
) -> Result<SettingsLoad, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!("no settings at {}", path.display());
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let load = match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => match SettingsData::from_json(&value) {
            (settings, None) => {
                SettingsLoad::new(settings, SettingsLoadStatus::Loaded)
            },
            (settings, Some(rejected)) => SettingsLoad::new(
                settings,
                SettingsLoadStatus::Invalid(rejected.to_string()),
            ),
        },
        Err(err) => SettingsLoad::new(
            SettingsData::default(),
            SettingsLoadStatus::Invalid(err.to_string()),
        ),
    };

    Ok(load)
}

/// Write settings to `path`, replacing the previous file atomically.
pub fn save_settings_to_path(
    path: &Path,
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_vec_pretty(settings)?;
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, payload)?;
    fs::rename(&staging, path)?;
    log::debug!("settings saved to {}", path.display());

    Ok(())
}

fn settings_path() -> PathBuf {
    let base = std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config"))
        .unwrap_or_else(std::env::temp_dir);

    base.join("navrail").join("settings.json")
}
