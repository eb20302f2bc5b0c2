//! Leaderboard ordering.

use crate::config::MetricsConfig;
use crate::models::{GroupSummary, JobRecord};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Descending by order count, then by total time. Groups equal on both keep
/// their input order.
pub fn rank(mut summaries: Vec<GroupSummary>) -> Vec<GroupSummary> {
    summaries.sort_by(|a, b| {
        compare_desc(
            (a.order_count, a.total_time_minutes),
            (b.order_count, b.total_time_minutes),
        )
    });
    summaries
}

/// The worker shown by default: most tickets, ties broken by most time.
/// Grouped by name only, across teams and shifts. Ties on both keys go to
/// the alphabetically first name. Records left out by the missing-date
/// policy do not count.
pub fn top_worker(records: &[JobRecord], cfg: &MetricsConfig) -> Option<String> {
    let mut tallies: HashMap<&str, (usize, f64)> = HashMap::new();

    for r in records.iter().filter(|r| cfg.includes(r)) {
        let entry = tallies.entry(r.worker_name.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += r.time_minutes;
    }

    let mut ranked: Vec<(&str, (usize, f64))> = tallies.into_iter().collect();
    ranked.sort_by(|a, b| compare_desc(a.1, b.1).then_with(|| a.0.cmp(b.0)));
    ranked.first().map(|(name, _)| name.to_string())
}

fn compare_desc(a: (usize, f64), b: (usize, f64)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| b.1.total_cmp(&a.1))
}
