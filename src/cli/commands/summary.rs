use crate::cli::commands::Dataset;
use crate::core::Core;
use crate::errors::AppResult;
use crate::models::{GroupSummary, Product};
use crate::ui::messages::{header, warning};
use crate::utils::formatting::{bold, fmt2, fmt_num};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub(crate) fn handle(data: &Dataset) -> AppResult<()> {
    let dashboard = Core::build_dashboard(&data.records, &data.metrics);

    header("PERFORMANCE ANALYTICS");
    let mut cards = Table::new(vec![
        Column::left("Product"),
        Column::right("Tasks/man-day"),
        Column::right("Avg time"),
    ]);
    for card in &dashboard.cards {
        cards.add_row(vec![
            card.product.label().to_string(),
            fmt2(card.man_day_average),
            fmt2(card.mean_time),
        ]);
    }
    print!("{}", cards.render());
    println!("{}", bold(&format!("Total Order: {}", dashboard.total_orders)));
    println!(
        "Flagged: {} SIP, {} SMT, {} HTS",
        dashboard.anomalies.short_in_progress,
        dashboard.anomalies.spending_more_time,
        dashboard.anomalies.high_time_vs_size
    );

    header("Team Summary");
    let teams = Core::team_leaderboard(&data.records, &data.metrics);
    if teams.is_empty() {
        warning("No jobs match the selected filters.");
        return Ok(());
    }
    print!("{}", team_table(&teams).render());

    Ok(())
}

fn team_table(teams: &[GroupSummary]) -> Table {
    let mut columns = vec![
        Column::left("Team"),
        Column::left("Shift"),
        Column::right("Present"),
        Column::right("Orders"),
        Column::right("Time"),
        Column::right("SQM"),
    ];
    columns.extend(Product::known().iter().map(|p| Column::right(p.code())));
    columns.push(Column::right("Idle"));

    let mut table = Table::new(columns);
    for t in teams {
        let mut row = vec![
            t.key.team.clone(),
            t.key.shift.clone(),
            t.present.to_string(),
            t.order_count.to_string(),
            fmt_num(t.total_time_minutes),
            fmt_num(t.total_area_sqm),
        ];
        row.extend(Product::known().iter().map(|p| t.products.get(p).to_string()));
        row.push(mins2readable(t.idle_minutes));
        table.add_row(row);
    }
    table
}
