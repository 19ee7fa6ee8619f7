use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_DIR};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the persisted session, relative to the config dir
    pub dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_SESSION_DIR),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::session("session.dir cannot be empty"));
        }

        // Must stay inside the config dir
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::session(
                "session.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
