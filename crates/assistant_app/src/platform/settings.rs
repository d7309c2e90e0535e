use std::fs;
use std::path::Path;

use assistant_core::Lang;
use assistant_logging::{assistant_info, assistant_warn};
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = ".assistant.ron";

/// App settings loaded from `.assistant.ron` in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Endpoint of the AI text operation.
    pub endpoint: String,
    /// Display language code ("en", "fr", "ar").
    pub ui_language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:54321/functions/v1/ai-text-helper".to_string(),
            ui_language: "en".to_string(),
        }
    }
}

impl Settings {
    pub fn ui_lang(&self) -> Lang {
        Lang::from_code(&self.ui_language).unwrap_or(Lang::En)
    }
}

/// Reads settings from `dir`, falling back to defaults on any problem.
pub fn load(dir: &Path) -> Settings {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            assistant_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => {
            assistant_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(err) => {
            assistant_warn!("Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}
