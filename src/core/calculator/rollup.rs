//! Team and worker roll-ups.

use crate::config::MetricsConfig;
use crate::core::calculator::idle::idle_minutes;
use crate::models::{GroupKey, GroupSummary, JobRecord, Product, ProductCounts};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Group by (team, shift).
pub fn team_summary(records: &[JobRecord], cfg: &MetricsConfig) -> BTreeMap<GroupKey, GroupSummary> {
    let groups = group_by(records, cfg, |r| GroupKey::team(&r.team, &r.shift));

    groups
        .into_iter()
        .map(|(key, members)| {
            let summary = summarize_group(key.clone(), &members, cfg);
            (key, summary)
        })
        .collect()
}

/// Group by (worker, team, shift).
pub fn worker_summary(
    records: &[JobRecord],
    cfg: &MetricsConfig,
) -> BTreeMap<GroupKey, GroupSummary> {
    let groups = group_by(records, cfg, |r| {
        GroupKey::worker(&r.worker_name, &r.team, &r.shift)
    });

    groups
        .into_iter()
        .map(|(key, members)| {
            let summary = summarize_group(key.clone(), &members, cfg);
            (key, summary)
        })
        .collect()
}

/// Aggregate one group. An empty slice yields an all-zero summary.
///
/// Idle is `max(0, worked_days * capacity - dated time)` for worker and team
/// groups alike.
pub fn summarize_group(key: GroupKey, records: &[&JobRecord], cfg: &MetricsConfig) -> GroupSummary {
    let mut workers: HashSet<&str> = HashSet::new();
    let mut dates: HashSet<NaiveDate> = HashSet::new();
    let mut man_days: HashSet<(&str, NaiveDate)> = HashSet::new();
    let mut products = ProductCounts::default();
    let mut order_count = 0;
    let mut total_time = 0.0;
    let mut total_area = 0.0;
    let mut dated_time = 0.0;

    for r in records {
        if !cfg.includes(r) {
            continue;
        }

        workers.insert(r.worker_name.as_str());
        products.record(&r.product, &r.job_type);
        order_count += 1;
        total_time += r.time_minutes;
        total_area += r.area_sqm;

        if let Some(d) = r.date {
            dates.insert(d);
            man_days.insert((r.worker_name.as_str(), d));
            dated_time += r.time_minutes;
        }
    }

    GroupSummary {
        key,
        present: workers.len(),
        order_count,
        total_time_minutes: total_time,
        total_area_sqm: total_area,
        products,
        worked_days: dates.len(),
        man_days: man_days.len(),
        idle_minutes: idle_minutes(dates.len(), dated_time, cfg.daily_capacity_minutes),
    }
}

/// Task counts per product for one worker, most frequent first.
pub fn product_breakdown(
    records: &[JobRecord],
    worker: &str,
    cfg: &MetricsConfig,
) -> Vec<(Product, usize)> {
    let mut counts: BTreeMap<Product, usize> = BTreeMap::new();

    for r in records.iter().filter(|r| r.worker_name == worker) {
        if !cfg.includes(r) {
            continue;
        }
        *counts.entry(r.product.clone()).or_default() += 1;
    }

    let mut out: Vec<(Product, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));
    out
}

fn group_by<'a, F>(
    records: &'a [JobRecord],
    cfg: &MetricsConfig,
    key_of: F,
) -> BTreeMap<GroupKey, Vec<&'a JobRecord>>
where
    F: Fn(&JobRecord) -> GroupKey,
{
    let mut groups: BTreeMap<GroupKey, Vec<&JobRecord>> = BTreeMap::new();

    for r in records {
        if !cfg.includes(r) {
            continue;
        }
        groups.entry(key_of(r)).or_default().push(r);
    }

    groups
}
