use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Prepare a freshly opened connection: connection settings first, then the
/// schema through the migration engine (no direct CREATE TABLE here).
///
/// Returns the number of migrations applied by this call.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    // Two terminals punching at once queue on the write lock instead of failing.
    conn.busy_timeout(Duration::from_secs(5))?;

    run_pending_migrations(conn)
}
