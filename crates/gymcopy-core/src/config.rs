//! Configuration file for generator defaults.
//!
//! ```text
//! ~/.config/gymcopy/
//! └── config.toml    # optional defaults for hero-generator
//! ```
//!
//! Every field is optional; missing fields keep the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GymCopyError, Result};
use crate::hero::{Emotion, HeroRequest};
use crate::template::HeadlineStyle;

const APP_DIR: &str = "gymcopy";
const CONFIG_FILE: &str = "config.toml";

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GymCopyConfig {
    /// Seed for reproducible template selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Defaults for the hero generator
    pub hero: HeroRequest,
}

impl GymCopyConfig {
    /// Returns the default config file location (`<config_dir>/gymcopy/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    tracing::debug!("No config file found, using built-in defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from {:?}", path);
        let content = fs::read_to_string(path).map_err(|e| {
            GymCopyError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Whitelists the enumerated hero fields.
    pub fn validate(&self) -> Result<()> {
        if HeadlineStyle::from_str(&self.hero.style).is_err() {
            return Err(GymCopyError::invalid_argument(format!(
                "Unknown hero style '{}' in config",
                self.hero.style
            )));
        }
        if Emotion::from_str(&self.hero.emotion).is_err() {
            return Err(GymCopyError::invalid_argument(format!(
                "Unknown hero emotion '{}' in config",
                self.hero.emotion
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GymCopyConfig::from_toml_str("").unwrap();
        assert_eq!(config, GymCopyConfig::default());
        assert_eq!(config.hero.members_count, 500);
        assert_eq!(config.hero.martial_art, "MMA");
        assert_eq!(config.hero.gym_name, "Our Gym");
        assert_eq!(config.hero.cta_url, "#free-trial");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_hero_section_keeps_other_defaults() {
        let config = GymCopyConfig::from_toml_str(
            r#"
seed = 42

[hero]
gym_name = "Tiger Den"
members_count = 250
"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.hero.gym_name, "Tiger Den");
        assert_eq!(config.hero.members_count, 250);
        assert_eq!(config.hero.style, "transformation");
        assert_eq!(config.hero.time_frame, "90 days");
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let err = GymCopyConfig::from_toml_str("[hero]\nstyle = \"loud\"\n").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_every_command_line_emotion_is_accepted() {
        for emotion in ["empowerment", "community", "transformation", "competition"] {
            let toml = format!("[hero]\nemotion = \"{emotion}\"\n");
            assert!(GymCopyConfig::from_toml_str(&toml).is_ok(), "{emotion}");
        }
    }

    #[test]
    fn test_unknown_emotion_is_rejected() {
        let err = GymCopyConfig::from_toml_str("[hero]\nemotion = \"rage\"\n").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_malformed_toml_is_serialization_error() {
        let err = GymCopyConfig::from_toml_str("[hero\n").unwrap_err();
        assert!(matches!(err, GymCopyError::Serialization { .. }));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[hero]\nmartial_art = \"Judo\"").unwrap();

        let config = GymCopyConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.hero.martial_art, "Judo");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = GymCopyConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, GymCopyError::Config(_)));
    }
}
