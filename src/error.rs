//! Error taxonomy shared by the core and io layers.
//!
//! Every fatal condition maps to one stable exit code (see
//! [`crate::exit_codes`]); only `main` converts errors into process exits.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

#[derive(Debug, Error)]
pub enum Error {
    /// The environment variable locating the site config is absent.
    #[error("environment variable {name} is not set")]
    EnvironmentMissing { name: &'static str },

    #[error("unable to read config file {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Update-only write precondition: the store never creates the file.
    #[error("config file {path} does not exist; refusing to create it")]
    ConfigMissing { path: PathBuf },

    #[error("unable to write config file {path}: {source}")]
    ConfigUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Parse failure is a distinct error value, never a sentinel mapping.
    #[error("malformed config file {path}: {source}")]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Non-fatal: callers report it as a diagnostic and continue.
    #[error("unknown flag \"{0}\"")]
    UnknownFlag(String),

    #[error("--all cannot be combined with explicit flag names")]
    ConflictingModifier,

    #[error("unsupported list format \"{0}\"")]
    UnsupportedFormat(String),
}

impl Error {
    /// Stable exit code for this condition.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::EnvironmentMissing { .. } => exit_codes::ENVIRONMENT_MISSING,
            Error::ConfigUnreadable { .. } => exit_codes::CONFIG_UNREADABLE,
            Error::ConfigMissing { .. } | Error::ConfigUnwritable { .. } => {
                exit_codes::CONFIG_UNWRITABLE
            }
            Error::MalformedConfig { .. } => exit_codes::MALFORMED_CONFIG,
            // Absorbed by callers before reaching main; exits clean if it
            // ever surfaces.
            Error::UnknownFlag(_) => exit_codes::OK,
            Error::ConflictingModifier => exit_codes::CONFLICTING_MODIFIER,
            Error::UnsupportedFormat(_) => exit_codes::UNSUPPORTED_FORMAT,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
