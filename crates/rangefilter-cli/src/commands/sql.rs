//! SQL rendering command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rangefilter::FilterOutcome;
use rangefilter_core::config::AppConfig;
use rangefilter_core::error::AppError;
use rangefilter_core::types::RangeNumber;
use rangefilter_sql::SqlQuery;

use crate::output::{self, OutputFormat};

/// Arguments for the sql command
#[derive(Debug, Args)]
pub struct SqlArgs {
    /// Entity to query
    #[arg(short, long)]
    pub entity: String,

    /// URL query string, e.g. 'range[price][between]=10..20'
    pub query: String,
}

/// One bound parameter
#[derive(Debug, Serialize, Tabled)]
struct ParameterRow {
    /// Parameter name
    name: String,
    /// Bound value
    value: RangeNumber,
}

/// Rendered query
#[derive(Debug, Serialize)]
struct SqlOutput {
    dql: String,
    sql: String,
    parameters: Vec<ParameterRow>,
    outcome: FilterOutcome,
}

/// Execute the sql command
pub fn execute(args: &SqlArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let filter = super::build_filter(config, &args.entity)?;

    let mut query = SqlQuery::new(&args.entity);
    let outcome = filter.apply_query(&args.query, &mut query)?;
    super::report_outcome(&filter, &outcome);

    let rendered = SqlOutput {
        dql: query.dql(),
        sql: query.to_query_builder().sql().to_string(),
        parameters: query
            .parameters()
            .iter()
            .map(|(name, value)| ParameterRow {
                name: name.clone(),
                value: *value,
            })
            .collect(),
        outcome,
    };

    match format {
        OutputFormat::Json => output::print_json(&rendered)?,
        OutputFormat::Table => {
            output::print_kv("DQL", &rendered.dql);
            output::print_kv("SQL", &rendered.sql);
            output::print_table(&rendered.parameters);
        }
    }

    Ok(())
}
