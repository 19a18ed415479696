// Stocklist - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Configuration loading and validation
// 4. Interactive session launch

use clap::Parser;
use std::path::PathBuf;

use stocklist::app::repl;
use stocklist::platform::config::{self, PlatformPaths};
use stocklist::util::{constants, logging};

/// Session-scoped product catalog manager.
#[derive(Debug, Parser)]
#[command(name = constants::APP_NAME, version = constants::APP_VERSION)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(long)]
    debug: bool,

    /// Path to an explicit config file (default: platform config dir).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Config must load before logging init so [logging] level applies,
    // but any messages produced during loading are replayed after.
    let (config, warnings) = match &cli.config {
        Some(path) => match config::load_config_from(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("{e}");
                return std::process::ExitCode::FAILURE;
            }
        },
        None => {
            let paths = PlatformPaths::resolve();
            config::load_config(&paths.config_dir)
        }
    };

    logging::init(cli.debug, config.log_level.as_deref());

    for warning in &warnings {
        tracing::warn!("{}", warning);
        eprintln!("Warning: {warning}");
    }

    tracing::info!(
        version = constants::APP_VERSION,
        categories = config.categories.len(),
        "Starting interactive session"
    );

    match repl::run(&config) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Session ended with error");
            eprintln!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}
