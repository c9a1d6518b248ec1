use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_punch, delete_punches_for_date, fetch_punches_for_date};
use crate::errors::{AppError, AppResult, StorageContext};
use crate::models::punch_type::PunchType;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one punch of `date`, or all of them when `punch_type` is `None`.
    /// Returns the number of punches removed.
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        punch_type: Option<PunchType>,
    ) -> AppResult<usize> {
        let tx = pool.conn.transaction().storage("start delete", &date)?;

        let removed = match punch_type {
            Some(kind) => {
                let n = delete_punch(&tx, &date, kind).storage("delete punch", &date)?;
                if n == 0 {
                    return Err(AppError::PunchNotFound { date, punch: kind });
                }
                ttlog_or_warn(
                    &tx,
                    "del",
                    &format!("{} {}", date, kind.code()),
                    &format!("Deleted {} punch", kind),
                );
                n
            }
            None => {
                let existing = fetch_punches_for_date(&tx, &date).storage("read punches", &date)?;
                if existing.is_empty() {
                    return Err(AppError::NoPunchesForDate(date));
                }
                let n = delete_punches_for_date(&tx, &date).storage("delete punches", &date)?;
                ttlog_or_warn(
                    &tx,
                    "del",
                    &date.to_string(),
                    &format!("Deleted all {} punches of the day", n),
                );
                n
            }
        };

        tx.commit().storage("commit delete", &date)?;
        Ok(removed)
    }
}
