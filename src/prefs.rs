//! Session preferences - the persisted skin-tone choice.
//!
//! Stored as JSON in the platform data dir. Loading is tolerant: a missing
//! or corrupted file yields defaults, never an error.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::skin::SkinTone;

/// Per-session picker preferences with persistence.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Preferred skin-tone modifier, applied across the whole picker.
    pub skin_tone: Option<SkinTone>,

    /// Path to the preferences file.
    #[serde(skip)]
    data_path: Option<PathBuf>,
}

impl Preferences {
    /// Create empty preferences that will persist to the default location.
    pub fn new() -> Self {
        Self {
            skin_tone: None,
            data_path: Self::default_path(),
        }
    }

    /// Load preferences from the default location.
    ///
    /// Returns defaults if the file doesn't exist or is corrupted.
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load preferences from an explicit path (primarily for tests).
    pub fn load_from(data_path: Option<PathBuf>) -> Self {
        let mut prefs = if let Some(ref path) = data_path {
            if path.exists() {
                match fs::read_to_string(path) {
                    Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
                    Err(_) => Self::default(),
                }
            } else {
                Self::default()
            }
        } else {
            Self::default()
        };

        prefs.data_path = data_path;
        prefs
    }

    /// Get the default path for preference data.
    fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("emopick").join("preferences.json"))
    }

    /// Update the skin-tone preference and persist it.
    pub fn set_skin_tone(&mut self, tone: Option<SkinTone>) {
        self.skin_tone = tone;
        self.save();
    }

    /// Save preferences to disk.
    pub fn save(&self) {
        let Some(ref path) = self.data_path else {
            return;
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("emopick-test")
            .join(format!("{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let prefs = Preferences::load_from(Some(temp_path("missing")));
        assert!(prefs.skin_tone.is_none());
    }

    #[test]
    fn skin_tone_round_trips_through_disk() {
        let path = temp_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut prefs = Preferences::load_from(Some(path.clone()));
        prefs.set_skin_tone(SkinTone::new('\u{1F3FE}'));

        let reloaded = Preferences::load_from(Some(path.clone()));
        assert_eq!(reloaded.skin_tone, SkinTone::new('\u{1F3FE}'));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupted_file_yields_defaults() {
        let path = temp_path("corrupted");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json at all").unwrap();

        let prefs = Preferences::load_from(Some(path.clone()));
        assert!(prefs.skin_tone.is_none());

        let _ = fs::remove_file(&path);
    }
}
