use crate::cli::commands::Dataset;
use crate::cli::parser::Commands;
use crate::core::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::color_for_idle;
use crate::utils::formatting::fmt_num;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub(crate) fn handle(cmd: &Commands, data: &Dataset) -> AppResult<()> {
    if let Commands::Workers { top } = cmd {
        let mut ranked = Core::worker_leaderboard(&data.records, &data.metrics);
        if let Some(n) = top {
            ranked.truncate(*n);
        }

        header("Worker Ranking");
        if ranked.is_empty() {
            warning("No jobs match the selected filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("Name"),
            Column::left("Team"),
            Column::left("Shift"),
            Column::right("Orders"),
            Column::right("Time"),
            Column::right("SQM"),
            Column::right("Rework"),
            Column::right("Days"),
            Column::right("Idle"),
        ]);

        for (i, w) in ranked.iter().enumerate() {
            table.add_colored_row(
                vec![
                    (i + 1).to_string(),
                    w.key.worker.clone().unwrap_or_default(),
                    w.key.team.clone(),
                    w.key.shift.clone(),
                    w.order_count.to_string(),
                    fmt_num(w.total_time_minutes),
                    fmt_num(w.total_area_sqm),
                    w.products.rework_jobs.to_string(),
                    w.worked_days.to_string(),
                    mins2readable(w.idle_minutes),
                ],
                color_for_idle(w.idle_minutes),
            );
        }

        print!("{}", table.render());
    }
    Ok(())
}
