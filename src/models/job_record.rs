use crate::models::category::{EmployeeType, JobType, Product};
use chrono::NaiveDate;
use serde::Serialize;

/// One completed ticket.
///
/// Values are already coerced by the loader: a missing or unparseable date is
/// `None`, and `time_minutes` / `area_sqm` are finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecord {
    pub ticket_id: String,
    pub date: Option<NaiveDate>,
    pub worker_name: String,
    pub team: String,
    pub shift: String,
    pub employee_type: EmployeeType,
    pub product: Product,
    pub job_type: JobType,
    pub time_minutes: f64,
    pub area_sqm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
}

impl JobRecord {
    /// A live Artist job with no date, team or measurements yet.
    pub fn new(ticket_id: impl Into<String>, worker_name: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            date: None,
            worker_name: worker_name.into().trim().to_string(),
            team: String::new(),
            shift: String::new(),
            employee_type: EmployeeType::Artist,
            product: Product::Other(String::new()),
            job_type: JobType::LiveJob,
            time_minutes: 0.0,
            area_sqm: 0.0,
            floor: None,
            labels: None,
        }
    }

    pub fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    pub fn with_team(mut self, team: &str, shift: &str) -> Self {
        self.team = team.trim().to_string();
        self.shift = shift.trim().to_string();
        self
    }

    pub fn with_employee_type(mut self, employee_type: EmployeeType) -> Self {
        self.employee_type = employee_type;
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.product = product;
        self
    }

    pub fn with_job_type(mut self, job_type: JobType) -> Self {
        self.job_type = job_type;
        self
    }

    pub fn with_time(mut self, minutes: f64) -> Self {
        self.time_minutes = sanitize_measure(minutes);
        self
    }

    pub fn with_area(mut self, sqm: f64) -> Self {
        self.area_sqm = sanitize_measure(sqm);
        self
    }

    /// The man-day this record belongs to, if it has a date.
    pub fn worker_day(&self) -> Option<WorkerDayKey> {
        self.date.map(|date| WorkerDayKey {
            worker_name: self.worker_name.clone(),
            date,
        })
    }
}

/// One person's one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerDayKey {
    pub worker_name: String,
    pub date: NaiveDate,
}

/// Negative, NaN and infinite values become 0.
pub fn sanitize_measure(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
