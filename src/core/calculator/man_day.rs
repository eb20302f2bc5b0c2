//! Per-product averages.

use crate::config::MetricsConfig;
use crate::models::{JobRecord, JobType, Product};
use std::collections::HashSet;

/// Tasks per man-day for one product and job type, rounded to 2 decimals.
///
/// A man-day is a distinct (worker, date) pair; records without a date never
/// create one. Whether they still count as tasks follows the missing-date
/// policy. Returns 0.0 when no man-day exists.
pub fn man_day_average(
    records: &[JobRecord],
    product: &Product,
    job_type: &JobType,
    cfg: &MetricsConfig,
) -> f64 {
    let mut task_count = 0usize;
    let mut man_days = HashSet::new();

    for r in records
        .iter()
        .filter(|r| product.matches(&r.product) && r.job_type == *job_type)
    {
        match r.worker_day() {
            Some(key) => {
                man_days.insert(key);
                task_count += 1;
            }
            None if cfg.includes(r) => task_count += 1,
            None => {}
        }
    }

    if man_days.is_empty() {
        return 0.0;
    }

    round2(task_count as f64 / man_days.len() as f64)
}

/// Mean minutes per task of a product, rounded to 2 decimals; 0.0 when nothing matches.
pub fn mean_time(records: &[JobRecord], product: &Product, cfg: &MetricsConfig) -> f64 {
    let (count, total) = records
        .iter()
        .filter(|r| product.matches(&r.product))
        .filter(|r| cfg.includes(r))
        .fold((0usize, 0.0), |(n, sum), r| (n + 1, sum + r.time_minutes));

    if count == 0 {
        return 0.0;
    }

    round2(total / count as f64)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
