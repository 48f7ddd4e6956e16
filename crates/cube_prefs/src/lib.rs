//! User preferences.
//!
//! Preferences are layered with [`config`]: the built-in `default.yaml`
//! first, then an optional user file on top. Any key missing from the user
//! file keeps its default value.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate strum;

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animation;
mod colors;

pub use animation::*;
pub use colors::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Built-in preferences.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Move animation.
    pub animation: AnimationPreferences,
    /// Sticker colors.
    pub colors: ColorPalette,
}

impl Preferences {
    /// Loads the built-in preferences, overridden by `user_file` if it is
    /// given.
    ///
    /// Returns an error if `user_file` does not exist, is not valid YAML, or
    /// contains invalid values.
    pub fn load(user_file: Option<&Path>) -> eyre::Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        if let Some(path) = user_file {
            log::info!("Loading preferences from {}", path.display());
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }

        let prefs: Self = config.build()?.try_deserialize()?;
        prefs.animation.validate()?;
        Ok(prefs)
    }

    /// Serializes the preferences to YAML.
    pub fn to_yaml_string(&self) -> eyre::Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Writes the preferences to `path` as YAML, creating parent directories
    /// as needed.
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_defaults() {
        let prefs = Preferences::load(None).unwrap();
        assert_eq!(*DEFAULT_PREFS, prefs);
        assert_eq!(0.2, prefs.animation.twist_duration);
        assert_eq!(Interpolation::Cosine, prefs.animation.interpolation);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let yaml = DEFAULT_PREFS.to_yaml_string().unwrap();
        let reloaded: Preferences = serde_norway::from_str(&yaml).unwrap();
        assert_eq!(*DEFAULT_PREFS, reloaded);
    }
}
