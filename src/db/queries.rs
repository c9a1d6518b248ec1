use crate::core::flow::FlowError;
use crate::errors::AppError;
use crate::models::day_punches::DayPunches;
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row, params};
use std::collections::BTreeMap;

const SELECT_PUNCHES: &str = "SELECT id, date, punch_type, time, source, created_at FROM punches";

fn date_key(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn map_row(row: &Row) -> Result<Punch> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let kind_str: String = row.get("punch_type")?;
    let punch_type = PunchType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            Box::new(FlowError::UnknownPunchType(kind_str.clone())),
        )
    })?;

    // The time stays raw: malformed values are dropped later by the calculators.
    Ok(Punch {
        id: row.get("id")?,
        date,
        punch_type,
        time: row.get("time")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// All punches of a date, ordered by time of day.
pub fn fetch_punches_for_date(conn: &Connection, date: &NaiveDate) -> Result<Vec<Punch>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_PUNCHES} WHERE date = ?1 ORDER BY time ASC, id ASC"
    ))?;

    let rows = stmt.query_map([date_key(date)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_day(conn: &Connection, date: &NaiveDate) -> Result<DayPunches> {
    Ok(DayPunches::new(*date, fetch_punches_for_date(conn, date)?))
}

/// All punches with `start <= date <= end`, ordered by date then time.
pub fn load_punches_between(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> Result<Vec<Punch>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_PUNCHES} WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC, time ASC, id ASC"
    ))?;

    let rows = stmt.query_map(params![date_key(start), date_key(end)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_punches(conn: &Connection) -> Result<Vec<Punch>> {
    let mut stmt =
        conn.prepare_cached(&format!("{SELECT_PUNCHES} ORDER BY date ASC, time ASC, id ASC"))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// One `DayPunches` per calendar day of `dates`, empty days included.
pub fn load_days(conn: &Connection, dates: &[NaiveDate]) -> Result<Vec<DayPunches>> {
    let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) else {
        return Ok(Vec::new());
    };

    let mut by_date: BTreeMap<NaiveDate, Vec<Punch>> = BTreeMap::new();
    for p in load_punches_between(conn, first, last)? {
        by_date.entry(p.date).or_default().push(p);
    }

    Ok(dates
        .iter()
        .map(|d| DayPunches::new(*d, by_date.remove(d).unwrap_or_default()))
        .collect())
}

/// Insert a new punch. Fails on a duplicate `(date, punch_type)`.
pub fn insert_punch(conn: &Connection, p: &Punch) -> Result<i64> {
    conn.execute(
        "INSERT INTO punches (date, punch_type, time, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            date_key(&p.date),
            p.punch_type.to_db_str(),
            p.time,
            p.source,
            p.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite the time of an existing punch. Returns the number of rows updated.
pub fn update_punch_time(
    conn: &Connection,
    date: &NaiveDate,
    punch_type: PunchType,
    time: &str,
) -> Result<usize> {
    conn.execute(
        "UPDATE punches SET time = ?1, source = 'manual'
         WHERE date = ?2 AND punch_type = ?3",
        params![time, date_key(date), punch_type.to_db_str()],
    )
}

pub fn delete_punch(conn: &Connection, date: &NaiveDate, punch_type: PunchType) -> Result<usize> {
    conn.execute(
        "DELETE FROM punches WHERE date = ?1 AND punch_type = ?2",
        params![date_key(date), punch_type.to_db_str()],
    )
}

pub fn delete_punches_for_date(conn: &Connection, date: &NaiveDate) -> Result<usize> {
    conn.execute("DELETE FROM punches WHERE date = ?1", [date_key(date)])
}
