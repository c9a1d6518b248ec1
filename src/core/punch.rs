use crate::core::flow::can_register;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_punch, load_day};
use crate::errors::{AppError, AppResult, StorageContext};
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use chrono::NaiveDateTime;
use rusqlite::TransactionBehavior;

/// Live punch: validated against the strict flow and stamped with `now`.
pub struct PunchLogic;

impl PunchLogic {
    pub fn register(
        pool: &mut DbPool,
        punch_type: PunchType,
        now: NaiveDateTime,
    ) -> AppResult<Punch> {
        let date = now.date();

        // IMMEDIATE: the read-validate-insert sequence holds the write lock.
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .storage("start punch", &date)?;

        let day = load_day(&tx, &date).storage("read punches", &date)?;

        can_register(&day.existing_types(), punch_type).map_err(|reason| {
            AppError::Rejected {
                date,
                punch: punch_type,
                reason,
            }
        })?;

        let mut punch = Punch::new(date, punch_type, now.time(), "live");
        punch.id = insert_punch(&tx, &punch).storage("insert punch", &date)? as i32;

        ttlog_or_warn(
            &tx,
            "punch",
            &format!("{} {}", punch.date_str(), punch_type.code()),
            &format!("{} registered at {}", punch_type, punch.time),
        );

        tx.commit().storage("commit punch", &date)?;
        Ok(punch)
    }
}
