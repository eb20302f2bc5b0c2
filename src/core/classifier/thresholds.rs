//! Minute thresholds of the anomaly rules.
//!
//! The comparison operator of each threshold is fixed by the rule that uses it
//! (see `classifier`), and the asymmetries are intentional.

/// QC review below this is Short-In-Progress (strict `<`).
pub const QC_SHORT_BELOW: f64 = 2.0;

/// Artist floorplan at or below this is Short-In-Progress (`<=`).
pub const FLOORPLAN_SHORT_AT_MOST: f64 = 15.0;

/// Artist measurement below this is Short-In-Progress (strict `<`).
pub const MEASUREMENT_SHORT_BELOW: f64 = 5.0;

/// Any other Artist product at or below this is Short-In-Progress (`<=`).
pub const ARTIST_SHORT_AT_MOST: f64 = 10.0;

/// QC review above this is Spending-More-Time (strict `>`).
pub const QC_LONG_ABOVE: f64 = 20.0;

/// Any Artist job at or above this is Spending-More-Time (`>=`).
pub const ARTIST_LONG_AT_LEAST: f64 = 150.0;

/// Artist measurement above this is Spending-More-Time (strict `>`).
pub const MEASUREMENT_LONG_ABOVE: f64 = 40.0;

/// Minutes allowed on top of the area (in sqm) before a job counts as slow for its size.
pub const SIZE_ALLOWANCE: f64 = 15.0;
