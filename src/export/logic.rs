// src/export/logic.rs

use crate::config::MetricsConfig;
use crate::core::Core;
use crate::core::classifier::{self, Criteria};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{JobRow, TeamRow, WorkerRow};
use crate::export::{ExportFormat, ReportKind};
use crate::models::JobRecord;
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// High-level export entry point.
pub struct ExportLogic;

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub report: ReportKind,
    pub criteria: Criteria,
    pub format: ExportFormat,
    pub file: &'a str,
    pub force: bool,
}

impl ExportLogic {
    /// Export one report over an already filtered record snapshot.
    ///
    /// `file` must be an absolute path. Returns the number of rows written.
    pub fn export(
        records: &[JobRecord],
        cfg: &MetricsConfig,
        request: &ExportRequest<'_>,
    ) -> AppResult<usize> {
        let path = Path::new(request.file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                request.file
            )));
        }

        ensure_writable(path, request.force)?;

        let written = match request.report {
            ReportKind::Teams => {
                let rows: Vec<TeamRow> = Core::team_leaderboard(records, cfg)
                    .iter()
                    .map(TeamRow::from)
                    .collect();
                write_rows(&rows, request.format, path)?
            }
            ReportKind::Workers => {
                let rows: Vec<WorkerRow> = Core::worker_leaderboard(records, cfg)
                    .iter()
                    .enumerate()
                    .map(|(i, s)| WorkerRow::ranked(i + 1, s))
                    .collect();
                write_rows(&rows, request.format, path)?
            }
            ReportKind::Tracking => {
                let result = classifier::track(records, request.criteria);
                let rows: Vec<JobRow> = result.jobs.iter().map(JobRow::from).collect();
                write_rows(&rows, request.format, path)?
            }
        };

        debug!(
            report = ?request.report,
            format = request.format.as_str(),
            rows = written,
            "export finished"
        );
        Ok(written)
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<usize> {
    if rows.is_empty() {
        warning("No rows for the selected filters; writing an empty report.");
    }

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }

    Ok(rows.len())
}
