use crate::cli::commands::Dataset;
use crate::cli::parser::Commands;
use crate::core::classifier::track;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::color_for_anomaly;
use crate::utils::formatting::{bold, fmt_num};
use crate::utils::table::{Column, Table};

pub(crate) fn handle(cmd: &Commands, data: &Dataset) -> AppResult<()> {
    if let Commands::Track { criteria } = cmd {
        let result = track(&data.records, *criteria);

        header(format!("PERFORMANCE TRACKING: {}", criteria.label()));
        println!("{}", bold(&format!("Total Jobs Found: {}", result.total())));

        if result.jobs.is_empty() {
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::left("Ticket ID"),
            Column::left("Name"),
            Column::left("Team"),
            Column::left("Type"),
            Column::left("Product"),
            Column::right("Time"),
            Column::right("SQM"),
            Column::left("Flag"),
        ]);

        for f in &result.jobs {
            let r = f.record;
            table.add_colored_row(
                vec![
                    r.date.map(|d| d.to_string()).unwrap_or_default(),
                    r.ticket_id.clone(),
                    r.worker_name.clone(),
                    r.team.clone(),
                    r.employee_type.label().to_string(),
                    r.product.label().to_string(),
                    fmt_num(r.time_minutes),
                    fmt_num(r.area_sqm),
                    f.kind.code().to_string(),
                ],
                color_for_anomaly(f.kind),
            );
        }

        print!("{}", table.render());
    }
    Ok(())
}
