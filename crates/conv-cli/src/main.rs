//! conv - registration admin CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in (password from the environment)
//! CONV_PASSWORD=secret conv login --username admin
//!
//! # Register an attendee
//! conv register --name Ana --surname Diaz --age 10 --sex Femenino \
//!     --reference PM-0042 --amount 100 --participation Niño
//!
//! # Second page of minors, newest first, as cards
//! conv list --category minors --sort registered --desc --page 2 --view cards
//!
//! # Dashboard totals as JSON
//! conv stats --pretty
//! ```

use conv_cli::{Cli, run_cli};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_cli(cli).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
