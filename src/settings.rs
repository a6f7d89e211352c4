use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS};

const APP_DIR_NAME: &str = "gridsnake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// User preferences persisted between runs.
///
/// Only preferences live here; game sessions themselves are never
/// persisted. Unknown or missing fields fall back to defaults so old
/// settings files keep working.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u16,
    pub height: u16,
    pub tick_interval_ms: u64,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            theme: "ember".to_owned(),
        }
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from disk.
///
/// Returns defaults when the file does not exist yet (first run). Returns
/// `Err` when the file exists but cannot be read or parsed, so the caller
/// can surface a warning before entering raw terminal mode.
pub fn load_settings() -> io::Result<Settings> {
    load_settings_from_path(&settings_path())
}

/// Saves settings to disk, creating parent directories when needed.
pub fn save_settings(settings: &Settings) -> io::Result<()> {
    save_settings_to_path(&settings_path(), settings)
}

fn load_settings_from_path(path: &Path) -> io::Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e),
    };

    serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn save_settings_to_path(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)
}
