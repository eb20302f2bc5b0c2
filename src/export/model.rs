// src/export/model.rs

use crate::core::classifier::Flagged;
use crate::models::GroupSummary;
use serde::Serialize;

/// Flat team row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct TeamRow {
    pub team: String,
    pub shift: String,
    pub present: usize,
    pub total_orders: usize,
    pub total_time: f64,
    pub total_sqm: f64,
    pub floorplan_queue: usize,
    pub measurement_queue: usize,
    pub autocad_queue: usize,
    pub urban_angles: usize,
    pub van_bree_media: usize,
    pub rework_queue: usize,
    pub rework_jobs: usize,
    pub man_days: usize,
    pub idle_minutes: f64,
}

/// Flat worker row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct WorkerRow {
    pub rank: usize,
    pub worker: String,
    pub team: String,
    pub shift: String,
    pub total_orders: usize,
    pub total_time: f64,
    pub total_sqm: f64,
    pub floorplan_queue: usize,
    pub measurement_queue: usize,
    pub autocad_queue: usize,
    pub urban_angles: usize,
    pub van_bree_media: usize,
    pub rework_queue: usize,
    pub rework_jobs: usize,
    pub worked_days: usize,
    pub idle_minutes: f64,
}

/// One tracked job.
#[derive(Serialize, Clone, Debug)]
pub struct JobRow {
    pub date: String,
    pub ticket_id: String,
    pub name: String,
    pub team: String,
    pub shift: String,
    pub employee_type: String,
    pub product: String,
    pub job_type: String,
    pub time: f64,
    pub sqm: f64,
    pub flag: String,
}

impl From<&GroupSummary> for TeamRow {
    fn from(s: &GroupSummary) -> Self {
        Self {
            team: s.key.team.clone(),
            shift: s.key.shift.clone(),
            present: s.present,
            total_orders: s.order_count,
            total_time: s.total_time_minutes,
            total_sqm: s.total_area_sqm,
            floorplan_queue: s.products.floorplan_queue,
            measurement_queue: s.products.measurement_queue,
            autocad_queue: s.products.autocad_queue,
            urban_angles: s.products.urban_angles,
            van_bree_media: s.products.van_bree_media,
            rework_queue: s.products.rework_queue,
            rework_jobs: s.products.rework_jobs,
            man_days: s.man_days,
            idle_minutes: s.idle_minutes,
        }
    }
}

impl WorkerRow {
    pub fn ranked(rank: usize, s: &GroupSummary) -> Self {
        Self {
            rank,
            worker: s.key.worker.clone().unwrap_or_default(),
            team: s.key.team.clone(),
            shift: s.key.shift.clone(),
            total_orders: s.order_count,
            total_time: s.total_time_minutes,
            total_sqm: s.total_area_sqm,
            floorplan_queue: s.products.floorplan_queue,
            measurement_queue: s.products.measurement_queue,
            autocad_queue: s.products.autocad_queue,
            urban_angles: s.products.urban_angles,
            van_bree_media: s.products.van_bree_media,
            rework_queue: s.products.rework_queue,
            rework_jobs: s.products.rework_jobs,
            worked_days: s.worked_days,
            idle_minutes: s.idle_minutes,
        }
    }
}

impl From<&Flagged<'_>> for JobRow {
    fn from(f: &Flagged<'_>) -> Self {
        let r = f.record;
        Self {
            date: r.date.map(|d| d.to_string()).unwrap_or_default(),
            ticket_id: r.ticket_id.clone(),
            name: r.worker_name.clone(),
            team: r.team.clone(),
            shift: r.shift.clone(),
            employee_type: r.employee_type.to_string(),
            product: r.product.to_string(),
            job_type: r.job_type.to_string(),
            time: r.time_minutes,
            sqm: r.area_sqm,
            flag: f.kind.code().to_string(),
        }
    }
}
