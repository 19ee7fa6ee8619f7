use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "conv")]
#[command(about = "Registration admin for convention attendees")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API root URL (overrides api.base_url from config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Print JSON instead of the terminal views
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pub pretty: bool,
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    PrettyJson,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.pretty {
            OutputFormat::PrettyJson
        } else if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
