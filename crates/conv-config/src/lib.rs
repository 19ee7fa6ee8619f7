mod api_config;
mod config;
mod error;
mod list_config;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use list_config::{ListConfig, ListView};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "CONV_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".conv";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 300;
const DEFAULT_LOGIN_PATH: &str = "/login";

const DEFAULT_SESSION_DIR: &str = "session";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

const DEFAULT_LIST_PAGE_SIZE: usize = 10;
const LIST_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];
