// src/export/model.rs

use crate::core::calculator::weekly::day_hours;
use crate::export::ExportRow;
use crate::models::day_punches::DayPunches;
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One stored punch.
#[derive(Serialize, Clone, Debug)]
pub struct PunchExport {
    pub id: i32,
    pub date: String,
    pub punch_type: String,
    pub time: String,
    pub source: String,
}

impl From<&Punch> for PunchExport {
    fn from(p: &Punch) -> Self {
        Self {
            id: p.id,
            date: p.date_str(),
            punch_type: p.punch_type.to_db_str().to_string(),
            time: p.time.clone(),
            source: p.source.clone(),
        }
    }
}

impl ExportRow for PunchExport {
    fn headers() -> &'static [&'static str] {
        &["id", "date", "punch_type", "time", "source"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.punch_type.clone(),
            self.time.clone(),
            self.source.clone(),
        ]
    }
}

/// One day: its four punches side by side and the worked hours.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub clock_in: String,
    pub lunch_out: String,
    pub lunch_in: String,
    pub clock_out: String,
    pub worked_hours: f64,
}

impl DayExport {
    pub fn from_day(day: &DayPunches, now: NaiveDateTime) -> Self {
        let time_of = |t: PunchType| day.get(t).map(|p| p.time.clone()).unwrap_or_default();
        let hours = day_hours(day, now).hours();

        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            clock_in: time_of(PunchType::ClockIn),
            lunch_out: time_of(PunchType::LunchOut),
            lunch_in: time_of(PunchType::LunchIn),
            clock_out: time_of(PunchType::ClockOut),
            worked_hours: (hours * 100.0).round() / 100.0,
        }
    }
}

impl ExportRow for DayExport {
    fn headers() -> &'static [&'static str] {
        &[
            "date",
            "clock_in",
            "lunch_out",
            "lunch_in",
            "clock_out",
            "worked_hours",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.clock_in.clone(),
            self.lunch_out.clone(),
            self.lunch_in.clone(),
            self.clock_out.clone(),
            format!("{:.2}", self.worked_hours),
        ]
    }
}
