//! Parameter description command.

use clap::Args;
use tabled::Tabled;

use rangefilter_core::config::AppConfig;
use rangefilter_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the describe command
#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Entity to describe
    #[arg(short, long)]
    pub entity: String,
}

/// One accepted parameter
#[derive(Debug, Tabled)]
struct DescriptionRow {
    /// Query parameter
    parameter: String,
    /// Internal property
    property: String,
    /// Value type
    #[tabled(rename = "type")]
    kind: String,
    /// Required flag
    required: bool,
}

/// Execute the describe command
pub fn execute(
    args: &DescribeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let filter = super::build_filter(config, &args.entity)?;
    let description = filter.describe();

    match format {
        OutputFormat::Json => output::print_json(&description)?,
        OutputFormat::Table => {
            let rows: Vec<_> = description
                .into_iter()
                .map(|(parameter, entry)| DescriptionRow {
                    parameter,
                    property: entry.property,
                    kind: entry.kind,
                    required: entry.required,
                })
                .collect();
            output::print_table(&rows);
        }
    }

    Ok(())
}
