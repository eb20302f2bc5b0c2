//! Caller-side filter context: narrows the raw dataset before it reaches
//! the aggregator and the classifier.

use crate::errors::{AppError, AppResult};
use crate::models::{EmployeeType, JobRecord, Product};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    /// Inclusive date bounds.
    pub period: Option<(NaiveDate, NaiveDate)>,
    pub team: Option<String>,
    pub shift: Option<String>,
    pub employee_type: Option<EmployeeType>,
    pub product: Option<Product>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// With a period set, undated records are dropped: they cannot fall in a range.
    pub fn accepts(&self, r: &JobRecord) -> bool {
        if let Some((start, end)) = self.period {
            match r.date {
                Some(d) if d >= start && d <= end => {}
                _ => return false,
            }
        }

        if let Some(team) = &self.team
            && r.team != *team
        {
            return false;
        }

        if let Some(shift) = &self.shift
            && r.shift != *shift
        {
            return false;
        }

        if let Some(et) = &self.employee_type
            && r.employee_type != *et
        {
            return false;
        }

        if let Some(product) = &self.product
            && !product.matches(&r.product)
        {
            return false;
        }

        true
    }

    /// A fresh snapshot of the matching records.
    pub fn apply(&self, records: &[JobRecord]) -> Vec<JobRecord> {
        records.iter().filter(|r| self.accepts(r)).cloned().collect()
    }
}

/// Parse a period expression into inclusive bounds.
///
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `start:end` with both sides in the same form
pub fn parse_period(expr: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let expr = expr.trim();

    if let Some((start_raw, end_raw)) = expr.split_once(':') {
        let (start_raw, end_raw) = (start_raw.trim(), end_raw.trim());
        if start_raw.len() != end_raw.len() {
            return Err(AppError::InvalidRange(format!(
                "{expr}: start and end must have the same format"
            )));
        }

        let (start, _) = bounds_of(start_raw)?;
        let (_, end) = bounds_of(end_raw)?;

        if start > end {
            return Err(AppError::InvalidRange(format!("{expr}: start is after end")));
        }

        return Ok((start, end));
    }

    bounds_of(expr)
}

fn bounds_of(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((first, last_day_of_month(first).ok_or_else(invalid)?))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
