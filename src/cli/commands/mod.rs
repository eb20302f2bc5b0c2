pub mod config;
pub mod export;
pub mod init;
pub mod summary;
pub mod track;
pub mod worker;
pub mod workers;

use crate::cli::parser::{Cli, FilterArgs};
use crate::config::{Config, MetricsConfig};
use crate::core::filter::{RecordFilter, parse_period};
use crate::errors::{AppError, AppResult};
use crate::ingest::load_records;
use crate::models::{EmployeeType, JobRecord, Product};
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// Filtered snapshot handed to the metrics core by every report command.
pub(crate) struct Dataset {
    pub records: Vec<JobRecord>,
    pub metrics: MetricsConfig,
}

pub(crate) fn load_dataset(cli: &Cli, cfg: &Config) -> AppResult<Dataset> {
    let input = cli
        .input
        .clone()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| cfg.data_file.clone());

    if input.trim().is_empty() {
        return Err(AppError::Config(
            "no input file: pass --input or set data_file in the configuration".to_string(),
        ));
    }

    let report = load_records(Path::new(&input))?;
    let filter = build_filter(&cli.filter)?;
    let metrics = cfg.metrics();

    // Under `exclude`, undated rows leave every report, tracking included.
    let mut records = filter.apply(&report.records);
    records.retain(|r| metrics.includes(r));

    debug!(
        loaded = report.records.len(),
        kept = records.len(),
        filtered = !filter.is_empty(),
        "dataset ready"
    );

    Ok(Dataset { records, metrics })
}

pub(crate) fn build_filter(args: &FilterArgs) -> AppResult<RecordFilter> {
    let period = args.period.as_deref().map(parse_period).transpose()?;

    let product = args.product.as_deref().map(Product::from_label);
    if let Some(Product::Other(label)) = &product {
        warning(format!("Unknown product '{label}': no job will match."));
    }

    Ok(RecordFilter {
        period,
        team: args.team.as_deref().map(|s| s.trim().to_string()),
        shift: args.shift.as_deref().map(|s| s.trim().to_string()),
        employee_type: args.employee_type.as_deref().map(EmployeeType::from_label),
        product,
    })
}
