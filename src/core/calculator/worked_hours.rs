use crate::models::punch_type::PunchType;
use crate::utils::time::parse_punch_time;
use chrono::{Duration, NaiveTime};
use std::collections::BTreeMap;

/// Worked time of a closed (historical) day.
///
/// Needs both Clock-In and Clock-Out, otherwise the day counts as zero.
/// The lunch break is subtracted only when Lunch-Out comes before Lunch-In.
/// If a type is duplicated, the last entry wins.
pub fn calculate_worked_hours(entries: &[(PunchType, &str)]) -> Duration {
    let times: BTreeMap<PunchType, NaiveTime> = entries
        .iter()
        .filter_map(|(kind, raw)| parse_punch_time(raw).map(|t| (*kind, t)))
        .collect();

    let (Some(clock_in), Some(clock_out)) = (
        times.get(&PunchType::ClockIn),
        times.get(&PunchType::ClockOut),
    ) else {
        return Duration::zero();
    };

    let span = *clock_out - *clock_in;

    let lunch = match (
        times.get(&PunchType::LunchOut),
        times.get(&PunchType::LunchIn),
    ) {
        (Some(out), Some(back)) if back > out => *back - *out,
        _ => Duration::zero(),
    };

    (span - lunch).max(Duration::zero())
}

/// Decimal hours, as shown in tables and charts.
pub fn to_hours(d: Duration) -> f64 {
    d.num_seconds() as f64 / 3600.0
}
