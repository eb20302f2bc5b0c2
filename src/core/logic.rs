use crate::config::MetricsConfig;
use crate::core::calculator::{man_day, rollup};
use crate::core::classifier::AnomalyTally;
use crate::core::ranking;
use crate::models::dashboard::{Dashboard, ProductCard};
use crate::models::{GroupSummary, JobRecord, JobType, Product};

pub struct Core;

impl Core {
    /// Product cards, total orders and the anomaly tally. Every figure
    /// follows the missing-date policy.
    pub fn build_dashboard(records: &[JobRecord], cfg: &MetricsConfig) -> Dashboard {
        let cards = Product::known()
            .into_iter()
            .map(|product| ProductCard {
                man_day_average: man_day::man_day_average(
                    records,
                    &product,
                    &card_job_type(&product, cfg),
                    cfg,
                ),
                mean_time: man_day::mean_time(records, &product, cfg),
                product,
            })
            .collect();

        let total_orders = records.iter().filter(|r| cfg.includes(r)).count();

        Dashboard {
            cards,
            total_orders,
            anomalies: AnomalyTally::of(records.iter().filter(|r| cfg.includes(r))),
        }
    }

    /// Team summaries, best first.
    pub fn team_leaderboard(records: &[JobRecord], cfg: &MetricsConfig) -> Vec<GroupSummary> {
        ranking::rank(rollup::team_summary(records, cfg).into_values().collect())
    }

    /// Worker summaries, best first.
    pub fn worker_leaderboard(records: &[JobRecord], cfg: &MetricsConfig) -> Vec<GroupSummary> {
        ranking::rank(rollup::worker_summary(records, cfg).into_values().collect())
    }
}

/// The Rework queue only holds rework jobs; every other card uses the
/// configured job type.
fn card_job_type(product: &Product, cfg: &MetricsConfig) -> JobType {
    if *product == Product::Rework {
        JobType::Rework
    } else {
        cfg.default_job_type.clone()
    }
}
