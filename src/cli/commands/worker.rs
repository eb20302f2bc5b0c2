use crate::cli::commands::Dataset;
use crate::cli::parser::Commands;
use crate::core::calculator::{idle, rollup};
use crate::core::classifier::classify;
use crate::core::ranking::top_worker;
use crate::errors::AppResult;
use crate::models::JobRecord;
use crate::ui::messages::{header, warning};
use crate::utils::colors::color_for_anomaly;
use crate::utils::formatting::fmt_num;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub(crate) fn handle(cmd: &Commands, data: &Dataset) -> AppResult<()> {
    if let Commands::Worker { name } = cmd {
        let selected = match name {
            Some(n) => Some(n.trim().to_string()),
            None => top_worker(&data.records, &data.metrics),
        };

        let Some(worker) = selected else {
            warning("No jobs match the selected filters.");
            return Ok(());
        };

        let jobs: Vec<JobRecord> = data
            .records
            .iter()
            .filter(|r| r.worker_name == worker)
            .cloned()
            .collect();

        header(format!("Stats: {worker}"));
        if jobs.is_empty() {
            warning(format!("No jobs for '{worker}' with the selected filters."));
            return Ok(());
        }

        let mut breakdown = Table::new(vec![Column::left("Product"), Column::right("Count")]);
        for (product, count) in rollup::product_breakdown(&jobs, &worker, &data.metrics) {
            breakdown.add_row(vec![product.label().to_string(), count.to_string()]);
        }
        print!("{}", breakdown.render());
        println!(
            "Idle: {}",
            mins2readable(idle::idle_for_records(&jobs, &data.metrics))
        );

        header("Individual Performance Detail");
        let mut detail = Table::new(vec![
            Column::left("Date"),
            Column::left("Order ID"),
            Column::left("Product"),
            Column::right("SQM"),
            Column::left("Floor"),
            Column::left("Labels"),
            Column::right("Time"),
            Column::left("Flag"),
        ]);
        for r in &jobs {
            let kind = classify(r);
            detail.add_colored_row(
                vec![
                    r.date
                        .map(|d| d.format("%m/%d/%Y").to_string())
                        .unwrap_or_default(),
                    r.ticket_id.clone(),
                    r.product.label().to_string(),
                    fmt_num(r.area_sqm),
                    r.floor.clone().unwrap_or_default(),
                    r.labels.clone().unwrap_or_default(),
                    fmt_num(r.time_minutes),
                    kind.code().to_string(),
                ],
                color_for_anomaly(kind),
            );
        }
        print!("{}", detail.render());
    }
    Ok(())
}
