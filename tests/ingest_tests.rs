mod common;
use common::{SAMPLE_CSV, day};
use prodmetrics::ingest::parse_records;
use prodmetrics::models::{EmployeeType, JobType, Product};

#[test]
fn parses_sample_export() {
    let report = parse_records(SAMPLE_CSV.as_bytes()).expect("valid csv");
    assert_eq!(report.records.len(), 6);
    assert_eq!(report.undated, 1);
    assert_eq!(report.coerced_numbers, 1);

    let first = &report.records[0];
    assert_eq!(first.ticket_id, "T1");
    assert_eq!(first.date, day(2025, 3, 3));
    assert_eq!(first.worker_name, "Alice");
    assert_eq!(first.team, "Alpha");
    assert_eq!(first.shift, "Morning");
    assert_eq!(first.employee_type, EmployeeType::Artist);
    assert_eq!(first.product, Product::FloorplanQueue);
    assert_eq!(first.job_type, JobType::LiveJob);
    assert_eq!(first.time_minutes, 12.0);
    assert_eq!(first.area_sqm, 80.0);
    assert_eq!(first.floor.as_deref(), Some("1"));

    let qc = &report.records[4];
    assert_eq!(qc.employee_type, EmployeeType::Qc);

    let broken = &report.records[5];
    assert_eq!(broken.date, None);
    assert_eq!(broken.time_minutes, 0.0);
    assert_eq!(broken.area_sqm, 10.0);
    assert_eq!(broken.floor, None);
}

#[test]
fn coerces_malformed_cells_and_keeps_unknown_categories() {
    let csv = "\
 date , Ticket ID ,Name,Team,Shift,Employee Type,Product,Job Type,Time,SQM
03/15/2025,A-1,  Mary   Ann ,Gamma,Day,Artist,Drone Survey,,-5,n/a
2025-03-16 08:30:00,A-2,Mary Ann,Gamma,Day,Supervisor,Rework,,20,
2025-03-17T09:00:00+02:00,A-3,Mary Ann,Gamma,Day,QC,Floorplan Queue,Rework,3.5,12.25
,A-4,Mary Ann,Gamma,Day,QC,floorplan queue,Live Job,NaN,1
";
    let report = parse_records(csv.as_bytes()).expect("valid csv");
    assert_eq!(report.records.len(), 4);
    assert_eq!(report.undated, 1);
    // -5, n/a, NaN
    assert_eq!(report.coerced_numbers, 3);

    let r = &report.records;
    assert_eq!(r[0].date, day(2025, 3, 15));
    assert_eq!(r[0].worker_name, "Mary Ann");
    assert_eq!(r[0].product, Product::Other("Drone Survey".into()));
    assert_eq!(r[0].job_type, JobType::LiveJob);
    assert_eq!(r[0].time_minutes, 0.0);
    assert_eq!(r[0].area_sqm, 0.0);

    assert_eq!(r[1].date, day(2025, 3, 16));
    assert_eq!(r[1].employee_type, EmployeeType::Other("Supervisor".into()));
    // Blank job type on a Rework product.
    assert_eq!(r[1].job_type, JobType::Rework);
    assert_eq!(r[1].area_sqm, 0.0);

    assert_eq!(r[2].date, day(2025, 3, 17));
    assert_eq!(r[2].job_type, JobType::Rework);
    assert_eq!(r[2].time_minutes, 3.5);
    assert_eq!(r[2].area_sqm, 12.25);

    assert_eq!(r[3].date, None);
    // Matching is case-sensitive.
    assert_eq!(r[3].product, Product::Other("floorplan queue".into()));
    assert_eq!(r[3].time_minutes, 0.0);
}

#[test]
fn missing_optional_columns_default() {
    let csv = "Name,Time\nZed,7\n";
    let report = parse_records(csv.as_bytes()).expect("valid csv");
    let r = &report.records[0];
    assert_eq!(r.worker_name, "Zed");
    assert_eq!(r.ticket_id, "");
    assert_eq!(r.date, None);
    assert_eq!(r.time_minutes, 7.0);
    assert_eq!(r.employee_type, EmployeeType::Other(String::new()));
}

#[test]
fn empty_export_yields_no_records() {
    let csv = "date,Ticket ID,Name,Team,Shift,Employee Type,Product,Time,SQM\n";
    let report = parse_records(csv.as_bytes()).expect("valid csv");
    assert!(report.records.is_empty());
    assert_eq!(report.undated, 0);
}
