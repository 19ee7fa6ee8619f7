use crate::LogLevel;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log to this file instead of stderr
    pub file: Option<String>,
    pub colored: bool,
}
