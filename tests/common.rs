#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use prodmetrics::models::{EmployeeType, JobRecord, JobType, Product};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pm() -> Command {
    cargo_bin_cmd!("prodmetrics")
}

pub const SAMPLE_CSV: &str = "\
date,Ticket ID,Name,Team,Shift,Employee Type,Product,Time,SQM,Floor,Labels
2025-03-03,T1,Alice,Alpha,Morning,Artist,Floorplan Queue,12,80,1,12
2025-03-03,T2,Alice,Alpha,Morning,Artist,Floorplan Queue,60,80,2,20
2025-03-04,T3,Alice,Alpha,Morning,Artist,Measurement Queue,45,20,1,4
2025-03-03,T4,Bob,Alpha,Morning,Artist,Autocad Queue,90,30,1,8
2025-03-03,T5,Dan,Alpha,Morning,QC,Floorplan Queue,1,50,1,10
not-a-date,T6,Cara,Beta,Night,Artist,Urban Angles,abc,10,,
";

/// Write `content` to a fresh file in the system temp dir and return its path.
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

/// A path in the system temp dir that does not exist yet.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("prodmetrics_{name}.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn day(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn artist(id: &str, product: Product, time: f64, area: f64) -> JobRecord {
    JobRecord::new(id, "Alice")
        .with_date(day(2025, 3, 3))
        .with_team("Alpha", "Morning")
        .with_employee_type(EmployeeType::Artist)
        .with_product(product)
        .with_time(time)
        .with_area(area)
}

pub fn qc(id: &str, time: f64) -> JobRecord {
    JobRecord::new(id, "Quinn")
        .with_date(day(2025, 3, 3))
        .with_team("Alpha", "Morning")
        .with_employee_type(EmployeeType::Qc)
        .with_product(Product::FloorplanQueue)
        .with_time(time)
}

pub fn job(
    id: &str,
    worker: &str,
    date: Option<NaiveDate>,
    product: Product,
    time: f64,
) -> JobRecord {
    JobRecord::new(id, worker)
        .with_date(date)
        .with_team("Alpha", "Morning")
        .with_product(product)
        .with_job_type(JobType::LiveJob)
        .with_time(time)
}
