use crate::cli::commands::Dataset;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};

pub(crate) fn handle(cmd: &Commands, data: &Dataset) -> AppResult<()> {
    if let Commands::Export {
        report,
        format,
        file,
        criteria,
        force,
    } = cmd
    {
        let request = ExportRequest {
            report: *report,
            criteria: *criteria,
            format: *format,
            file,
            force: *force,
        };
        ExportLogic::export(&data.records, &data.metrics, &request)?;
    }
    Ok(())
}
