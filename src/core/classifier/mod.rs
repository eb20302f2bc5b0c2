//! Three-rule anomaly classifier.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//! Short-In-Progress, then Spending-More-Time, then High-Time-vs-Size.
//! High-Time-vs-Size excludes Spending-More-Time by definition, so a gross
//! overrun is reported once.

pub mod thresholds;

use crate::errors::{AppError, AppResult};
use crate::models::{EmployeeType, JobRecord, Product};
use serde::Serialize;
use std::str::FromStr;
use thresholds::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    ShortInProgress,
    SpendingMoreTime,
    HighTimeVsSize,
    Normal,
}

impl AnomalyKind {
    pub fn label(self) -> &'static str {
        match self {
            AnomalyKind::ShortInProgress => "Short IP",
            AnomalyKind::SpendingMoreTime => "Spending More Time",
            AnomalyKind::HighTimeVsSize => "High Time vs SQM",
            AnomalyKind::Normal => "Normal",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            AnomalyKind::ShortInProgress => "SIP",
            AnomalyKind::SpendingMoreTime => "SMT",
            AnomalyKind::HighTimeVsSize => "HTS",
            AnomalyKind::Normal => "-",
        }
    }
}

pub fn is_short_in_progress(r: &JobRecord) -> bool {
    match r.employee_type {
        EmployeeType::Qc => r.time_minutes < QC_SHORT_BELOW,
        EmployeeType::Artist => match r.product {
            Product::FloorplanQueue => r.time_minutes <= FLOORPLAN_SHORT_AT_MOST,
            Product::MeasurementQueue => r.time_minutes < MEASUREMENT_SHORT_BELOW,
            _ => r.time_minutes <= ARTIST_SHORT_AT_MOST,
        },
        EmployeeType::Other(_) => false,
    }
}

pub fn is_spending_more_time(r: &JobRecord) -> bool {
    match r.employee_type {
        EmployeeType::Qc => r.time_minutes > QC_LONG_ABOVE,
        EmployeeType::Artist => {
            if r.time_minutes >= ARTIST_LONG_AT_LEAST {
                return true;
            }
            r.product == Product::MeasurementQueue && r.time_minutes > MEASUREMENT_LONG_ABOVE
        }
        EmployeeType::Other(_) => false,
    }
}

pub fn is_high_time_vs_size(r: &JobRecord) -> bool {
    r.time_minutes > r.area_sqm + SIZE_ALLOWANCE && !is_spending_more_time(r)
}

pub fn classify(r: &JobRecord) -> AnomalyKind {
    if is_short_in_progress(r) {
        AnomalyKind::ShortInProgress
    } else if is_spending_more_time(r) {
        AnomalyKind::SpendingMoreTime
    } else if is_high_time_vs_size(r) {
        AnomalyKind::HighTimeVsSize
    } else {
        AnomalyKind::Normal
    }
}

/// Selection on the tracking page. Parsed from a code (`sip`) or a flag
/// label (`Short IP`), case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Criteria {
    #[default]
    All,
    ShortInProgress,
    SpendingMoreTime,
    HighTimeVsSize,
}

impl Criteria {
    pub fn label(self) -> &'static str {
        match self {
            Criteria::All => "All",
            Criteria::ShortInProgress => AnomalyKind::ShortInProgress.label(),
            Criteria::SpendingMoreTime => AnomalyKind::SpendingMoreTime.label(),
            Criteria::HighTimeVsSize => AnomalyKind::HighTimeVsSize.label(),
        }
    }

    fn accepts(self, kind: AnomalyKind) -> bool {
        match self {
            Criteria::All => true,
            Criteria::ShortInProgress => kind == AnomalyKind::ShortInProgress,
            Criteria::SpendingMoreTime => kind == AnomalyKind::SpendingMoreTime,
            Criteria::HighTimeVsSize => kind == AnomalyKind::HighTimeVsSize,
        }
    }
}

impl FromStr for Criteria {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Criteria::All),
            "sip" | "short ip" | "short-in-progress" => Ok(Criteria::ShortInProgress),
            "smt" | "spending more time" | "spending-more-time" => Ok(Criteria::SpendingMoreTime),
            "hts" | "high time vs sqm" | "high-time-vs-size" => Ok(Criteria::HighTimeVsSize),
            other => Err(AppError::InvalidCriteria(other.to_string())),
        }
    }
}

/// A flagged record together with the rule that caught it.
#[derive(Debug, Clone, PartialEq)]
pub struct Flagged<'a> {
    pub record: &'a JobRecord,
    pub kind: AnomalyKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackingResult<'a> {
    pub criteria: Criteria,
    pub jobs: Vec<Flagged<'a>>,
}

impl TrackingResult<'_> {
    /// "Total Jobs Found".
    pub fn total(&self) -> usize {
        self.jobs.len()
    }
}

/// Records matching the selected criteria, in input order.
pub fn track(records: &[JobRecord], criteria: Criteria) -> TrackingResult<'_> {
    let jobs = records
        .iter()
        .map(|record| Flagged {
            record,
            kind: classify(record),
        })
        .filter(|f| criteria.accepts(f.kind))
        .collect();

    TrackingResult { criteria, jobs }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnomalyTally {
    pub short_in_progress: usize,
    pub spending_more_time: usize,
    pub high_time_vs_size: usize,
    pub normal: usize,
}

impl AnomalyTally {
    pub fn of<'a>(records: impl IntoIterator<Item = &'a JobRecord>) -> Self {
        let mut tally = Self::default();
        for r in records {
            match classify(r) {
                AnomalyKind::ShortInProgress => tally.short_in_progress += 1,
                AnomalyKind::SpendingMoreTime => tally.spending_more_time += 1,
                AnomalyKind::HighTimeVsSize => tally.high_time_vs_size += 1,
                AnomalyKind::Normal => tally.normal += 1,
            }
        }
        tally
    }

    pub fn flagged(&self) -> usize {
        self.short_in_progress + self.spending_more_time + self.high_time_vs_size
    }
}
