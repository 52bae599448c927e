//! # Grocer Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Load configuration (file, environment, flags)
//! 3. Initialize tracing (logging to stderr)
//! 4. Open the store (loads both snapshots)
//! 5. Run the command and print its output
//!
//! Exit codes come from [`grocer_cli::error::ErrorCode::exit_code`].

use std::process::ExitCode;

use clap::Parser;
use grocer_cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    let cli = Cli::parse();

    match grocer_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            ExitCode::from(err.code.exit_code())
        }
    }
}
