//! # rangefilter-cli
//!
//! Renders `range[...]` query strings against a configured entity as SQL or
//! as an aggregation pipeline, and lists the parameters an entity accepts.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use rangefilter_core::config::AppConfig;
use rangefilter_core::config::logging::LoggingConfig;

pub mod commands;
pub mod output;

use commands::Cli;

/// Parse arguments, load configuration and run the selected command.
///
/// Exits the process with status 1 on failure.
pub fn run() {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            output::print_error(&format!("Failed to load configuration: {e}"));
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = cli.execute(&config) {
        tracing::error!("Command failed: {}", e);
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing; logs go to stderr so command output stays parseable.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
