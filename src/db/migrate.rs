use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// A named, idempotent schema step. Applied steps are recorded in the `log`
/// table as `migration_applied` rows whose target is the step name.
struct Migration {
    name: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "20251020_0001_create_punches",
        description: "Created punches table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS punches (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            punch_type  TEXT NOT NULL
                        CHECK(punch_type IN ('clock_in','lunch_out','lunch_in','clock_out')),
            time        TEXT NOT NULL,
            source      TEXT NOT NULL DEFAULT 'live',
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        name: "20251020_0002_punches_indexes",
        description: "Added (date, punch_type) uniqueness and (date, time) index",
        sql: r#"
        CREATE UNIQUE INDEX IF NOT EXISTS ux_punches_date_type ON punches(date, punch_type);
        CREATE INDEX IF NOT EXISTS idx_punches_date_time ON punches(date, time);
        "#,
    },
];

/// Ensure that the `log` table exists. It also tracks applied migrations,
/// so it is created before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, name: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([name], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, migration: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(migration.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![
            Local::now().to_rfc3339(),
            migration.name,
            migration.description
        ],
    )?;

    tx.commit()
}

/// Names of the migrations not applied yet, in application order.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut pending = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.name)? {
            pending.push(m.name);
        }
    }
    Ok(pending)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db(). Returns how many steps were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.name)? {
            continue;
        }

        apply(conn, m)
            .map_err(|e| AppError::Migration(format!("{} failed: {}", m.name, e)))?;

        success(format!("Migration applied: {} → {}", m.name, m.description));
        applied += 1;
    }

    Ok(applied)
}
