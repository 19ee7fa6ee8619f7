//! conv - terminal front-end for the registration backend
//!
//! Argument parsing, logging setup and the terminal views over the
//! `conv-client` controllers.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod navigator;
pub(crate) mod render;


pub use app::{App, PASSWORD_ENV, resolve_password, run_cli};
pub use cli::{Cli, OutputFormat};
pub use commands::{Commands, ListArgs, RegisterArgs};
pub use error::{CliError, Result as CliResult};
pub use navigator::TerminalNavigator;
pub use render::cards::NO_RECORDS_MESSAGE;
pub use render::dashboard::STATS_FAILED_MESSAGE;
