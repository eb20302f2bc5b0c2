//! Loader for the job-records CSV export.
//!
//! Every malformed cell is coerced here (see `parser`), so records handed
//! to the metrics core are always well-formed.

mod normalizer;
mod parser;

pub use parser::{IngestReport, parse_records};

use crate::errors::{AppError, AppResult};
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

pub fn load_records(path: &Path) -> AppResult<IngestReport> {
    let file = File::open(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("cannot open {}: {e}", path.display()),
        ))
    })?;

    let report = parse_records(file)?;

    info!(
        path = %path.display(),
        records = report.records.len(),
        "job records loaded"
    );
    if report.undated > 0 {
        warn!(rows = report.undated, "rows without a usable date");
    }
    if report.coerced_numbers > 0 {
        warn!(cells = report.coerced_numbers, "malformed Time/SQM cells read as 0");
    }

    Ok(report)
}
