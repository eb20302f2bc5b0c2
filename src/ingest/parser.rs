use super::normalizer::normalize_text;
use crate::models::job_record::sanitize_measure;
use crate::models::{EmployeeType, JobRecord, JobType, Product};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::trace;

/// Records read from one export plus how many cells had to be coerced.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub records: Vec<JobRecord>,
    /// Rows whose date was empty or unparseable.
    pub undated: usize,
    /// Non-empty `Time` / `SQM` cells that were not a non-negative number.
    pub coerced_numbers: usize,
}

pub fn parse_records<R: Read>(reader: R) -> Result<IngestReport, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut report = IngestReport::default();

    for (line, record) in csv_reader.deserialize::<JobRow>().enumerate() {
        let row = record?;

        let date = row.date.as_deref().and_then(parse_date);
        if date.is_none() {
            report.undated += 1;
            trace!(line = line + 2, raw = ?row.date, "row without a usable date");
        }

        let (time_minutes, time_ok) = parse_measure(row.time.as_deref());
        let (area_sqm, area_ok) = parse_measure(row.sqm.as_deref());
        report.coerced_numbers += usize::from(!time_ok) + usize::from(!area_ok);

        let product = Product::from_label(&text(row.product.as_deref()));
        let job_type = match row.job_type.as_deref().map(normalize_text) {
            Some(label) if !label.is_empty() => JobType::from_label(&label),
            _ => JobType::inferred_for(&product),
        };

        let record = JobRecord::new(text(row.ticket_id.as_deref()), text(row.name.as_deref()))
            .with_date(date)
            .with_team(&text(row.team.as_deref()), &text(row.shift.as_deref()))
            .with_employee_type(EmployeeType::from_label(&text(row.employee_type.as_deref())))
            .with_product(product)
            .with_job_type(job_type)
            .with_time(time_minutes)
            .with_area(area_sqm);

        report.records.push(JobRecord {
            floor: row.floor.as_deref().map(normalize_text),
            labels: row.labels.as_deref().map(normalize_text),
            ..record
        });
    }

    Ok(report)
}

#[derive(Debug, Deserialize)]
struct JobRow {
    #[serde(rename = "date", alias = "Date", default, deserialize_with = "empty_string_as_none")]
    date: Option<String>,
    #[serde(rename = "Ticket ID", default, deserialize_with = "empty_string_as_none")]
    ticket_id: Option<String>,
    #[serde(rename = "Name", default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(rename = "Team", default, deserialize_with = "empty_string_as_none")]
    team: Option<String>,
    #[serde(rename = "Shift", default, deserialize_with = "empty_string_as_none")]
    shift: Option<String>,
    #[serde(rename = "Employee Type", default, deserialize_with = "empty_string_as_none")]
    employee_type: Option<String>,
    #[serde(rename = "Product", default, deserialize_with = "empty_string_as_none")]
    product: Option<String>,
    #[serde(rename = "Job Type", default, deserialize_with = "empty_string_as_none")]
    job_type: Option<String>,
    #[serde(rename = "Time", default, deserialize_with = "empty_string_as_none")]
    time: Option<String>,
    #[serde(rename = "SQM", default, deserialize_with = "empty_string_as_none")]
    sqm: Option<String>,
    #[serde(rename = "Floor", default, deserialize_with = "empty_string_as_none")]
    floor: Option<String>,
    #[serde(rename = "Labels", default, deserialize_with = "empty_string_as_none")]
    labels: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn text(value: Option<&str>) -> String {
    value.map(normalize_text).unwrap_or_default()
}

/// Empty cells are 0 without counting as coerced.
fn parse_measure(value: Option<&str>) -> (f64, bool) {
    let Some(raw) = value else {
        return (0.0, true);
    };

    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => (v, true),
        Ok(v) => (sanitize_measure(v), false),
        Err(_) => (0.0, false),
    }
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d);
        }
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}
