use crate::core::calculator::reconstruct::{Reconstruction, reconstruct};
use crate::core::flow::enabled_types;
use crate::db::pool::DbPool;
use crate::db::queries::load_day;
use crate::errors::{AppResult, StorageContext};
use crate::models::day_punches::DayPunches;
use crate::models::punch_type::PunchType;
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

/// Snapshot of the current day, as shown by `status`.
#[derive(Debug, Clone)]
pub struct DayStatus {
    pub day: DayPunches,
    pub reconstruction: Reconstruction,
    pub enabled: BTreeSet<PunchType>,
}

pub struct StatusLogic;

impl StatusLogic {
    pub fn snapshot(pool: &DbPool, now: NaiveDateTime) -> AppResult<DayStatus> {
        let date = now.date();
        let day = load_day(&pool.conn, &date).storage("read punches", &date)?;

        let reconstruction = reconstruct(&day.entries(), date, now);
        let enabled = enabled_types(&day.existing_types());

        Ok(DayStatus {
            day,
            reconstruction,
            enabled,
        })
    }
}
