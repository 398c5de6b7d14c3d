use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ui::settings::AppSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("w5h1_writer");
    path.push("settings.json");
    path
}

pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &AppSettings) {
    if let Err(err) = save_settings_to(&settings_path(), settings) {
        tracing::warn!("could not save settings: {err:#}");
    }
}

/// Missing or unreadable files fall back to defaults.
pub fn load_settings_from(path: &Path) -> AppSettings {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return AppSettings::default();
        }
    };

    match serde_json::from_str::<AppSettings>(&raw) {
        Ok(settings) => settings.sanitized(),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring corrupt settings file");
            AppSettings::default()
        }
    }
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(settings).context("serializing settings")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
