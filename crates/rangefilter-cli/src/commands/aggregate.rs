//! Aggregation pipeline rendering command.

use clap::Args;
use serde::Serialize;

use rangefilter::FilterOutcome;
use rangefilter_core::config::AppConfig;
use rangefilter_core::error::AppError;
use rangefilter_document::AggregationBuilder;

use crate::output::{self, OutputFormat};

/// Arguments for the aggregate command
#[derive(Debug, Args)]
pub struct AggregateArgs {
    /// Collection to query
    #[arg(short, long)]
    pub entity: String,

    /// URL query string, e.g. 'range[price][gte]=10&range[price][lte]=20'
    pub query: String,
}

/// Rendered pipeline
#[derive(Debug, Serialize)]
struct AggregateOutput {
    pipeline: serde_json::Value,
    outcome: FilterOutcome,
}

/// Execute the aggregate command
pub fn execute(
    args: &AggregateArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let filter = super::build_filter(config, &args.entity)?;

    let mut aggregation = AggregationBuilder::new(&args.entity);
    let outcome = filter.apply_query(&args.query, &mut aggregation)?;
    super::report_outcome(&filter, &outcome);

    match format {
        OutputFormat::Json => output::print_json(&AggregateOutput {
            pipeline: aggregation.pipeline(),
            outcome,
        })?,
        OutputFormat::Table => {
            if aggregation.stages().is_empty() {
                println!("No stages.");
            }
            for stage in aggregation.stages() {
                println!("{stage}");
            }
        }
    }

    Ok(())
}
