use std::panic::Location;
use std::result::Result as StdResult;

use conv_client::{ClientError, LoginError};
use conv_config::ConfigError;
use conv_core::{CoreError, FieldErrors};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error("Not signed in: run `conv login --username <name>` first")]
    NotSignedIn,

    #[error("Invalid record: {0}")]
    Invalid(FieldErrors),

    /// The backend refused the operation; `message` is what the user sees
    #[error("{message}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Usage error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Output error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::output(err.to_string())
    }
}

pub type Result<T> = StdResult<T, CliError>;
