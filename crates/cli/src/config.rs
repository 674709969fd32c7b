//! Optional TOML defaults for the `bmi` command.

use std::{fs, path::Path};

use bmi_core::UnitSystem;
use serde::Deserialize;

use crate::{error::CliError, output::Format};

/// Defaults read from a config file.
///
/// ```toml
/// units = "imperial"
/// format = "json"
/// ```
///
/// Command-line flags take precedence over every value here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub units: UnitSystem,
    pub format: Format,
}

impl Config {
    /// Loads the config at `path`, or the built-in defaults if no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            tracing::debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| CliError::ParseConfig {
            path: path.to_owned(),
            source,
        })?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
