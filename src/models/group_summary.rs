use crate::models::category::{JobType, Product};
use serde::Serialize;

/// Grouping key for roll-ups. `worker` is `None` for team-level groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GroupKey {
    pub team: String,
    pub shift: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<String>,
}

impl GroupKey {
    pub fn team(team: &str, shift: &str) -> Self {
        Self {
            team: team.to_string(),
            shift: shift.to_string(),
            worker: None,
        }
    }

    pub fn worker(worker: &str, team: &str, shift: &str) -> Self {
        Self {
            team: team.to_string(),
            shift: shift.to_string(),
            worker: Some(worker.to_string()),
        }
    }
}

/// Exact-match counters per enumerated product, plus the rework job flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductCounts {
    pub floorplan_queue: usize,
    pub measurement_queue: usize,
    pub autocad_queue: usize,
    pub urban_angles: usize,
    pub van_bree_media: usize,
    pub rework_queue: usize,
    /// Jobs whose job type is Rework, whatever the product.
    pub rework_jobs: usize,
}

impl ProductCounts {
    pub fn record(&mut self, product: &Product, job_type: &JobType) {
        match product {
            Product::FloorplanQueue => self.floorplan_queue += 1,
            Product::MeasurementQueue => self.measurement_queue += 1,
            Product::AutocadQueue => self.autocad_queue += 1,
            Product::UrbanAngles => self.urban_angles += 1,
            Product::VanBreeMedia => self.van_bree_media += 1,
            Product::Rework => self.rework_queue += 1,
            Product::Other(_) => {}
        }

        if *job_type == JobType::Rework {
            self.rework_jobs += 1;
        }
    }

    pub fn get(&self, product: &Product) -> usize {
        match product {
            Product::FloorplanQueue => self.floorplan_queue,
            Product::MeasurementQueue => self.measurement_queue,
            Product::AutocadQueue => self.autocad_queue,
            Product::UrbanAngles => self.urban_angles,
            Product::VanBreeMedia => self.van_bree_media,
            Product::Rework => self.rework_queue,
            Product::Other(_) => 0,
        }
    }
}

/// Aggregates over one group of records. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub key: GroupKey,
    /// Distinct workers in the group.
    pub present: usize,
    pub order_count: usize,
    pub total_time_minutes: f64,
    pub total_area_sqm: f64,
    pub products: ProductCounts,
    /// Distinct dates in the group.
    pub worked_days: usize,
    /// Distinct (worker, date) pairs in the group.
    pub man_days: usize,
    pub idle_minutes: f64,
}

impl GroupSummary {
    pub fn empty(key: GroupKey) -> Self {
        Self {
            key,
            present: 0,
            order_count: 0,
            total_time_minutes: 0.0,
            total_area_sqm: 0.0,
            products: ProductCounts::default(),
            worked_days: 0,
            man_days: 0,
            idle_minutes: 0.0,
        }
    }
}
