//! Idle time: nominal capacity of the days worked minus the time logged.

use crate::config::MetricsConfig;
use crate::models::JobRecord;
use std::collections::HashSet;

/// `max(0, worked_days * daily_capacity - total_time)`.
/// A worker over capacity shows zero idle, never negative.
pub fn idle_minutes(worked_days: usize, total_time_minutes: f64, daily_capacity_minutes: f64) -> f64 {
    let capacity = worked_days as f64 * daily_capacity_minutes;
    (capacity - total_time_minutes).max(0.0)
}

/// Idle time of one worker's records. Records without a date contribute
/// neither a worked day nor logged time.
pub fn idle_for_records(records: &[JobRecord], cfg: &MetricsConfig) -> f64 {
    let mut dates = HashSet::new();
    let mut logged = 0.0;

    for r in records {
        if let Some(d) = r.date {
            dates.insert(d);
            logged += r.time_minutes;
        }
    }

    idle_minutes(dates.len(), logged, cfg.daily_capacity_minutes)
}
