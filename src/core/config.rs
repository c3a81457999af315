//! Config data loaded from external RON files.
//!
//! Allows tweaking controller feel and accessibility without recompilation.
//! Every loader falls back to `Default` with a logged warning, so a missing
//! or broken file never stops the game.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Location of the accessibility settings file.
pub const ACCESSIBILITY_PATH: &str = "assets/data/settings/accessibility.ron";

/// Player-facing accessibility settings.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Accessibility {
    /// Replace flickering lights and muzzle flashes with steady light.
    pub no_flashing_lights: bool,
}

/// Parse RON text into a config value. `path` is only used for messages.
pub fn parse_ron<T: DeserializeOwned>(contents: &str, path: &str) -> Result<T, ConfigError> {
    ron::from_str(contents).map_err(|e| ConfigError::ParseError {
        path: path.to_string(),
        details: e.to_string(),
    })
}

/// Read and parse a RON config file.
pub fn load_ron<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(display));
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;

    parse_ron(&contents, &display)
}

/// Load a config file, logging and falling back to defaults on failure.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &str) -> T {
    match load_ron(path) {
        Ok(config) => {
            info!("Loaded config from {}", path);
            config
        }
        Err(ConfigError::FileNotFound(_)) => {
            warn!("Could not find {}. Using defaults.", path);
            T::default()
        }
        Err(e) => {
            error!("{}. Using defaults.", e);
            T::default()
        }
    }
}

/// System to load accessibility settings at startup.
pub fn load_accessibility(mut commands: Commands) {
    let settings: Accessibility = load_or_default(ACCESSIBILITY_PATH);
    if settings.no_flashing_lights {
        info!("Flashing lights disabled");
    }
    commands.insert_resource(settings);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_accessibility_settings() {
        let settings: Accessibility =
            parse_ron("(no_flashing_lights: true)", "inline").unwrap();
        assert!(settings.no_flashing_lights);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Accessibility = parse_ron("()", "inline").unwrap();
        assert_eq!(settings, Accessibility::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let result: Result<Accessibility, _> = parse_ron("(no_flashing_lights: ", "broken.ron");
        match result {
            Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, "broken.ron"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_reported() {
        let result: Result<Accessibility, _> = load_ron("assets/data/does_not_exist.ron");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let settings: Accessibility = load_or_default("assets/data/does_not_exist.ron");
        assert!(!settings.no_flashing_lights);
    }

    #[test]
    fn reads_settings_from_disk() {
        let path = std::env::temp_dir().join("fpc_accessibility_test.ron");
        fs::write(&path, "(no_flashing_lights: true)").unwrap();

        let settings: Accessibility = load_ron(&path).unwrap();
        assert!(settings.no_flashing_lights);

        let _ = fs::remove_file(&path);
    }
}
