//! Picker configuration loading.
//!
//! TOML config under the platform config dir. Missing file means defaults;
//! a malformed file is reported and replaced by defaults rather than
//! aborting the picker.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PickerResult;
use crate::skin::SkinTone;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Path to a JSON corpus file overriding the bundled corpus.
    pub corpus_path: Option<PathBuf>,

    /// Skin-tone modifier applied before a session preference exists.
    pub default_skin_tone: Option<char>,

    /// Cap on displayed search results. Applied by the embedding UI, not by
    /// search itself.
    pub max_results: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            corpus_path: None,
            default_skin_tone: None,
            max_results: 60,
        }
    }
}

impl PickerConfig {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("emopick")
            .join("config.toml")
    }

    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_path();

        let mut config = if path.exists() {
            match Self::load_from_path(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[emopick] Failed to load config: {}", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.validate();
        config
    }

    /// Load config from an explicit path
    pub fn load_from_path(path: &Path) -> PickerResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The configured default tone, if it names a real modifier.
    pub fn default_skin_tone(&self) -> Option<SkinTone> {
        self.default_skin_tone.and_then(SkinTone::new)
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        self.max_results = self.max_results.clamp(1, 500);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = PickerConfig::default();
        assert!(config.corpus_path.is_none());
        assert!(config.default_skin_tone().is_none());
        assert_eq!(config.max_results, 60);
    }

    #[test]
    fn parses_full_config() {
        let toml = r#"
            corpus_path = "/tmp/corpus.json"
            default_skin_tone = "🏽"
            max_results = 30
        "#;
        let config: PickerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.corpus_path.as_deref(), Some(Path::new("/tmp/corpus.json")));
        assert_eq!(config.default_skin_tone(), SkinTone::new('\u{1F3FD}'));
        assert_eq!(config.max_results, 30);
    }

    #[test]
    fn invalid_tone_is_ignored() {
        let config = PickerConfig {
            default_skin_tone: Some('x'),
            ..PickerConfig::default()
        };
        assert!(config.default_skin_tone().is_none());
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: PickerConfig = toml::from_str("max_results = 10").unwrap();
        assert_eq!(config.max_results, 10);
        assert!(config.corpus_path.is_none());
    }
}
