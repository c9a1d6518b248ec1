use crate::config::Config;
use crate::core::calculator::weekly::{WeekSummary, summarize_week};
use crate::db::pool::DbPool;
use crate::db::queries::load_days;
use crate::errors::{AppResult, StorageContext};
use crate::utils::date::work_week;
use chrono::{NaiveDate, NaiveDateTime};

pub struct WeekLogic;

impl WeekLogic {
    /// Summary of the work week containing `date`, as seen at `now`.
    pub fn summary(
        pool: &DbPool,
        cfg: &Config,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> AppResult<WeekSummary> {
        let dates = work_week(date, cfg.work_days);
        let start = dates.first().copied().unwrap_or(date);

        let days = load_days(&pool.conn, &dates).storage("read week", &start)?;

        Ok(summarize_week(start, &days, cfg.weekly_goal_hours, now))
    }
}
