/// ANSI color helper utilities for terminal output.
use crate::core::classifier::AnomalyKind;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";

/// SIP → yellow, SMT → red, HTS → magenta, normal → reset.
pub fn color_for_anomaly(kind: AnomalyKind) -> &'static str {
    match kind {
        AnomalyKind::ShortInProgress => YELLOW,
        AnomalyKind::SpendingMoreTime => RED,
        AnomalyKind::HighTimeVsSize => MAGENTA,
        AnomalyKind::Normal => RESET,
    }
}

/// Idle color:
/// 0 → green
/// \>0 → grey
pub fn color_for_idle(idle_minutes: f64) -> &'static str {
    if idle_minutes > 0.0 { GREY } else { GREEN }
}
