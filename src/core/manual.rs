use crate::core::flow::{FlowError, can_register_manual};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_punch, load_day, update_punch_time};
use crate::errors::{AppError, AppResult, StorageContext};
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::TransactionBehavior;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualOutcome {
    Inserted,
    Replaced,
}

/// Manual punch entry: any date, user supplied time, relaxed flow rules.
pub struct ManualLogic;

impl ManualLogic {
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        punch_type: PunchType,
        time: NaiveTime,
        replace: bool,
    ) -> AppResult<ManualOutcome> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .storage("start manual punch", &date)?;

        let day = load_day(&tx, &date).storage("read punches", &date)?;
        let existing = day.existing_types();
        let punch = Punch::new(date, punch_type, time, "manual");
        let target = format!("{} {}", punch.date_str(), punch_type.code());

        let outcome = if existing.contains(&punch_type) {
            if !replace {
                return Err(AppError::Rejected {
                    date,
                    punch: punch_type,
                    reason: FlowError::AlreadyExists,
                });
            }

            let previous = day
                .get(punch_type)
                .map(|p| p.time.clone())
                .unwrap_or_default();

            update_punch_time(&tx, &date, punch_type, &punch.time)
                .storage("update punch", &date)?;

            ttlog_or_warn(
                &tx,
                "edit",
                &target,
                &format!("{} moved from {} to {}", punch_type, previous, punch.time),
            );
            ManualOutcome::Replaced
        } else {
            can_register_manual(&existing, punch_type).map_err(|reason| {
                AppError::Rejected {
                    date,
                    punch: punch_type,
                    reason,
                }
            })?;

            insert_punch(&tx, &punch).storage("insert punch", &date)?;

            ttlog_or_warn(
                &tx,
                "manual",
                &target,
                &format!("{} added manually at {}", punch_type, punch.time),
            );
            ManualOutcome::Inserted
        };

        tx.commit().storage("commit manual punch", &date)?;
        Ok(outcome)
    }
}
