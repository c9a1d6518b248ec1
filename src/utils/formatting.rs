//! Formatting utilities used for CLI and export outputs.

use chrono::Duration;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `HH:MM:SS`, the live counter format. Negative values show as zero.
pub fn format_hms(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// `07h 30m` (or `07:30` when `short`), with an optional sign.
pub fn secs2readable(secs: i64, want_sign: bool, short: bool) -> String {
    let abs_m = secs.abs() / 60;
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if secs > 0 && want_sign {
        "+"
    } else if secs < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Decimal hours with two digits, e.g. `7.50 h`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2} h", hours)
}
