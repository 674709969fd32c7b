use std::{io, path::PathBuf};

use bmi_core::ValidationError;
use thiserror::Error;

/// Errors that end a `bmi` invocation.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read config file `{path}`")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file `{path}`")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode JSON output")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// Rejected input exits with 1, everything else with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 1,
            Self::ReadConfig { .. } | Self::ParseConfig { .. } | Self::Json(_) => 2,
        }
    }
}
