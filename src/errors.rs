//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::flow::FlowError;
use crate::models::punch_type::PunchType;
use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage error while trying to {action} on {date}: {source}")]
    Storage {
        action: &'static str,
        date: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid period or range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Punch flow
    // ---------------------------
    #[error("Cannot register {punch} on {date}: {reason}")]
    Rejected {
        date: NaiveDate,
        punch: PunchType,
        #[source]
        reason: FlowError,
    },

    #[error("No punches found for date {0}")]
    NoPunchesForDate(NaiveDate),

    #[error("No {punch} punch found for date {date}")]
    PunchNotFound { date: NaiveDate, punch: PunchType },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Attach the storage action and the affected date to a rusqlite failure.
pub trait StorageContext<T> {
    fn storage(self, action: &'static str, date: &NaiveDate) -> AppResult<T>;
}

impl<T> StorageContext<T> for rusqlite::Result<T> {
    fn storage(self, action: &'static str, date: &NaiveDate) -> AppResult<T> {
        self.map_err(|source| AppError::Storage {
            action,
            date: date.format("%Y-%m-%d").to_string(),
            source,
        })
    }
}
