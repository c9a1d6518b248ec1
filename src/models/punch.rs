use super::punch_type::PunchType;
use crate::utils::time::parse_punch_time;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Punch {
    pub id: i32,
    pub date: NaiveDate,         // ⇔ punches.date (TEXT "YYYY-MM-DD")
    pub punch_type: PunchType,   // ⇔ punches.punch_type ('clock_in' | 'lunch_out' | ...)
    pub time: String,            // ⇔ punches.time (TEXT "HH:MM:SS", kept raw)
    pub source: String,          // ⇔ punches.source ('live' | 'manual')
    pub created_at: String,      // ⇔ punches.created_at (TEXT, ISO8601)
}

impl Punch {
    /// Build a punch that is not stored yet (`id = 0`).
    pub fn new(date: NaiveDate, punch_type: PunchType, time: NaiveTime, source: &str) -> Self {
        Self {
            id: 0,
            date,
            punch_type,
            time: time.format("%H:%M:%S").to_string(),
            source: source.to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Parsed time of day; `None` when the stored text is malformed.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        parse_punch_time(&self.time)
    }

    /// `HH:MM` for compact displays, or the raw text if it cannot be parsed.
    pub fn time_short(&self) -> String {
        self.time_of_day()
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| self.time.clone())
    }
}
