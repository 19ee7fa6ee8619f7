use crate::SessionError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        /// The request hit the client-side timeout
        timeout: bool,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: status {status}: {body} {location}")]
    Api {
        status: u16,
        body: Value,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {body} {location}")]
    Unauthorized { body: Value, location: ErrorLocation },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL {url}: {message} {location}")]
    Url {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            timeout: err.is_timeout(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an error from a non-2xx response
    #[track_caller]
    pub fn from_status(status: u16, body: Value) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if status == 401 {
            ClientError::Unauthorized { body, location }
        } else {
            ClientError::Api {
                status,
                body,
                location,
            }
        }
    }

    #[track_caller]
    pub fn url(url: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::Url {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of a backend rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Http { timeout: true, .. })
    }

    /// First non-empty string the backend sent under one of `keys`, in order
    pub fn backend_message(&self, keys: &[&str]) -> Option<String> {
        let body = match self {
            ClientError::Api { body, .. } | ClientError::Unauthorized { body, .. } => body,
            _ => return None,
        };
        keys.iter()
            .filter_map(|key| body.get(*key).and_then(Value::as_str))
            .find(|message| !message.trim().is_empty())
            .map(String::from)
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
