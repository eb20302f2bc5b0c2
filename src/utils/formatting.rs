//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// 135.5 → "02h 15m". Fractions of a minute are rounded.
pub fn mins2readable(mins: f64) -> String {
    let total = mins.max(0.0).round() as i64;
    format!("{:02}h {:02}m", total / 60, total % 60)
}

/// Two decimals, trailing zeros kept: 3.5 → "3.50".
pub fn fmt2(value: f64) -> String {
    format!("{value:.2}")
}

/// Drop a needless ".0" on whole numbers: 12.0 → "12", 12.5 → "12.5".
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
