use chrono::NaiveDate;
use rpunch::config::Config;
use rpunch::utils::date::{parse_range, period_bounds, weekday_str, work_week};
use rpunch::utils::formatting::{format_hms, secs2readable};
use rpunch::utils::table::Table;
use rpunch::utils::time::parse_manual_time;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn periods_and_ranges() {
    assert_eq!(period_bounds("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(period_bounds("2025").unwrap(), (d(2025, 1, 1), d(2025, 12, 31)));
    assert_eq!(
        parse_range("2025-09:2025-10").unwrap(),
        (d(2025, 9, 1), d(2025, 10, 31))
    );
    assert_eq!(
        parse_range("2025-10-13:2025-10-17").unwrap(),
        (d(2025, 10, 13), d(2025, 10, 17))
    );
    assert!(parse_range("2025-10:2025-09").is_err());
    assert!(parse_range("yesterday").is_err());
}

#[test]
fn work_week_starts_on_monday() {
    let week = work_week(d(2025, 10, 15), 5);
    assert_eq!(week.first(), Some(&d(2025, 10, 13)));
    assert_eq!(week.last(), Some(&d(2025, 10, 17)));
    assert_eq!(work_week(d(2025, 10, 19), 7).len(), 7);

    assert_eq!(weekday_str(d(2025, 10, 13), "Short").as_deref(), Some("Mon"));
    assert_eq!(weekday_str(d(2025, 10, 13), "long").as_deref(), Some("Monday"));
    assert_eq!(weekday_str(d(2025, 10, 13), "None"), None);
}

#[test]
fn manual_time_is_strict_hh_mm() {
    assert_eq!(parse_manual_time("09:05").unwrap().to_string(), "09:05:00");
    assert!(parse_manual_time("9:05").is_err());
    assert!(parse_manual_time("25:00").is_err());
    assert!(parse_manual_time("09:05:00").is_err());
}

#[test]
fn durations_render() {
    assert_eq!(format_hms(chrono::Duration::seconds(3725)), "01:02:05");
    assert_eq!(format_hms(chrono::Duration::seconds(-5)), "00:00:00");
    assert_eq!(secs2readable(27000, false, false), "07h 30m");
    assert_eq!(secs2readable(-1800, true, true), "-00:30");
}

#[test]
fn table_ignores_ansi_in_widths() {
    let mut t = Table::new(["A", "B"]);
    t.add_row(vec!["\x1b[32mxx\x1b[0m".to_string(), "y".to_string()]);
    let out = rpunch::utils::colors::strip_ansi(&t.render("="));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "A   B");
    assert_eq!(lines[1], "=====");
    assert_eq!(lines[2], "xx  y");
}

#[test]
fn config_defaults_fill_missing_fields() {
    let cfg = Config::from_yaml("weekly_goal_hours: 40\n").unwrap();
    assert_eq!(cfg.weekly_goal_hours, 40.0);
    assert_eq!(cfg.work_days, 5);
    assert_eq!(cfg.show_weekday, "Short");
}

#[test]
fn config_rejects_bad_values() {
    assert!(Config::from_yaml("work_days: 0\n").is_err());
    assert!(Config::from_yaml("weekly_goal_hours: -1\n").is_err());
    assert!(Config::from_yaml("work_days: [1, 2]\n").is_err());
}
