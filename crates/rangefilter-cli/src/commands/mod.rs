//! CLI command definitions and dispatch.

pub mod aggregate;
pub mod describe;
pub mod sql;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use rangefilter::{EntityMetadata, FilterOutcome, RangeFilter};
use rangefilter_core::config::AppConfig;
use rangefilter_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Preview range filter predicates for SQL and aggregation backends
#[derive(Debug, Parser)]
#[command(name = "rangefilter", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a query string as SQL
    Sql(sql::SqlArgs),
    /// Render a query string as an aggregation pipeline
    Aggregate(aggregate::AggregateArgs),
    /// List the range parameters an entity accepts
    Describe(describe::DescribeArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Sql(args) => sql::execute(args, config, self.format),
            Commands::Aggregate(args) => aggregate::execute(args, config, self.format),
            Commands::Describe(args) => describe::execute(args, config, self.format),
        }
    }
}

/// Helper: build the range filter for a configured entity
pub fn build_filter(config: &AppConfig, entity: &str) -> Result<RangeFilter, AppError> {
    let entity_config = config
        .entity(entity)
        .ok_or_else(|| AppError::configuration(format!("Entity '{entity}' is not configured")))?;

    let metadata = EntityMetadata::from_config(entity_config, config.filter.properties.clone());
    Ok(RangeFilter::from_config(&config.filter, Arc::new(metadata)))
}

/// Helper: surface the deprecated syntax flag to the user
pub fn report_outcome(filter: &RangeFilter, outcome: &FilterOutcome) {
    if outcome.deprecated_syntax {
        output::print_warning(&format!(
            "'{0}[<property>]=<value>' is deprecated, use '{0}[<property>][<operator>]=<value>'",
            filter.parameter_name()
        ));
    }
}
