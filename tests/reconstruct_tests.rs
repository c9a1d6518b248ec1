use chrono::{NaiveDate, NaiveDateTime};
use rpunch::core::calculator::reconstruct::{reconstruct, reconstruct_today};
use rpunch::models::punch_type::PunchType::{self, *};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 20).unwrap()
}

fn at(hms: &str) -> NaiveDateTime {
    day().and_time(chrono::NaiveTime::parse_from_str(hms, "%H:%M:%S").unwrap())
}

fn hours(h: f64) -> f64 {
    h * 3600.0
}

#[test]
fn empty_day_is_zero_and_idle() {
    let r = reconstruct(&[], day(), at("12:00:00"));
    assert_eq!(r.total_worked_seconds, 0.0);
    assert!(!r.is_ongoing);
    assert_eq!(r.ongoing_start, None);
}

#[test]
fn open_clock_in_counts_up_to_now() {
    let r = reconstruct(&[(ClockIn, "09:00:00")], day(), at("09:30:00"));
    assert!(r.is_ongoing);
    assert_eq!(r.ongoing_start, Some(at("09:00:00")));
    assert_eq!(r.total_worked_seconds, 1800.0);
}

#[test]
fn lunch_break_stops_the_counter() {
    let entries = [(ClockIn, "09:00:00"), (LunchOut, "13:00:00")];
    let r = reconstruct(&entries, day(), at("13:40:00"));
    assert!(!r.is_ongoing);
    assert_eq!(r.total_worked_seconds, hours(4.0));
}

#[test]
fn work_resumes_after_lunch() {
    let entries = [
        (ClockIn, "09:00:00"),
        (LunchOut, "12:00:00"),
        (LunchIn, "13:00:00"),
    ];
    let r = reconstruct(&entries, day(), at("15:00:00"));
    assert!(r.is_ongoing);
    assert_eq!(r.ongoing_start, Some(at("13:00:00")));
    assert_eq!(r.total_worked_seconds, hours(5.0));
    assert_eq!(r.spans.len(), 2);
}

#[test]
fn closed_day_ignores_now() {
    let entries = [
        (ClockIn, "09:00:00"),
        (LunchOut, "13:00:00"),
        (LunchIn, "14:00:00"),
        (ClockOut, "18:00:00"),
    ];
    let r = reconstruct(&entries, day(), at("23:00:00"));
    assert!(!r.is_ongoing);
    assert_eq!(r.total_worked_seconds, hours(8.0));
}

#[test]
fn day_without_lunch() {
    let entries = [(ClockIn, "08:30:00"), (ClockOut, "12:00:00")];
    let r = reconstruct(&entries, day(), at("20:00:00"));
    assert_eq!(r.total_worked_seconds, hours(3.5));
}

#[test]
fn input_order_does_not_matter() {
    let sorted = [
        (ClockIn, "09:00:00"),
        (LunchOut, "13:00:00"),
        (LunchIn, "14:00:00"),
        (ClockOut, "18:00:00"),
    ];
    let shuffled = [
        (ClockOut, "18:00:00"),
        (LunchIn, "14:00:00"),
        (ClockIn, "09:00:00"),
        (LunchOut, "13:00:00"),
    ];
    let now = at("19:00:00");
    assert_eq!(
        reconstruct(&sorted, day(), now),
        reconstruct(&shuffled, day(), now)
    );
}

#[test]
fn malformed_time_is_dropped() {
    let entries = [
        (ClockIn, "09:00:00"),
        (LunchOut, "lunch time"),
        (ClockOut, "17:00:00"),
    ];
    let r = reconstruct(&entries, day(), at("18:00:00"));
    assert_eq!(r.total_worked_seconds, hours(8.0));
    assert!(!r.is_ongoing);
}

#[test]
fn short_stored_times_are_accepted() {
    let entries: [(PunchType, &str); 2] = [(ClockIn, "09:00"), (ClockOut, "10:15")];
    let r = reconstruct(&entries, day(), at("12:00:00"));
    assert_eq!(r.total_worked_seconds, 4500.0);
}

#[test]
fn orphan_punches_contribute_nothing() {
    let entries = [(ClockOut, "17:00:00"), (LunchOut, "12:00:00")];
    let r = reconstruct(&entries, day(), at("18:00:00"));
    assert_eq!(r.total_worked_seconds, 0.0);
    assert!(!r.is_ongoing);
}

#[test]
fn never_negative() {
    // Clock-In in the future relative to now
    let r = reconstruct(&[(ClockIn, "10:00:00")], day(), at("09:00:00"));
    assert_eq!(r.total_worked_seconds, 0.0);
    assert!(r.is_ongoing);
}

#[test]
fn today_variant_uses_the_wall_clock() {
    assert_eq!(reconstruct_today(&[]).total_worked_seconds, 0.0);

    let r = reconstruct_today(&[(ClockIn, "00:00:00")]);
    assert!(r.is_ongoing);
    assert!(r.total_worked_seconds >= 0.0);
}

#[test]
fn single_digit_hour_is_not_dropped() {
    let entries = [(ClockIn, " 9:00:00"), (ClockOut, "9:30")];
    let r = reconstruct(&entries, day(), at("20:00:00"));
    assert_eq!(r.total_worked_seconds, 1800.0);
    assert!(!r.is_ongoing);
}

#[test]
fn lunch_in_without_clock_in_starts_a_span() {
    let entries = [(LunchIn, "14:00:00"), (ClockOut, "18:00:00")];
    let r = reconstruct(&entries, day(), at("20:00:00"));
    assert_eq!(r.total_worked_seconds, hours(4.0));
    assert!(!r.is_ongoing);
    assert_eq!(r.ongoing_start, None);
}

#[test]
fn lone_lunch_in_is_ongoing() {
    let r = reconstruct(&[(LunchIn, "14:00:00")], day(), at("15:00:00"));
    assert_eq!(r.total_worked_seconds, hours(1.0));
    assert!(r.is_ongoing);
    assert_eq!(r.ongoing_start, Some(at("14:00:00")));
}
