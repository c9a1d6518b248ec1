use crate::db::migrate::pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTALS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM punches", [], |row| row.get(0))?;
    let days: i64 = pool
        .conn
        .query_row("SELECT COUNT(DISTINCT date) FROM punches", [], |row| {
            row.get(0)
        })?;
    let closed_days: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT date) FROM punches WHERE punch_type = 'clock_out'",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Total punches:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);
    println!(
        "{}• Days recorded:{} {} ({} closed)",
        CYAN, RESET, days, closed_days
    );

    //
    // 3) DATE RANGE
    //
    let (first, last): (Option<String>, Option<String>) =
        pool.conn
            .query_row("SELECT MIN(date), MAX(date) FROM punches", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE PUNCHES/DAY
    //
    if days > 0 {
        println!(
            "{}• Average punches/day:{} {:.2}",
            CYAN,
            RESET,
            count as f64 / days as f64
        );
    }

    //
    // 5) SCHEMA
    //
    let pending = pending_migrations(&pool.conn)?;
    if pending.is_empty() {
        println!("{}• Schema:{} up to date", CYAN, RESET);
    } else {
        println!(
            "{}• Schema:{} {}{} pending migration(s){}",
            CYAN,
            RESET,
            YELLOW,
            pending.len(),
            RESET
        );
    }

    println!();
    Ok(())
}
