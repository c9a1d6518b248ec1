// src/export/logic.rs

use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_punches, load_punches_between};
use crate::errors::{AppError, AppResult};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DayExport, PunchExport};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportRow};
use crate::models::day_punches::DayPunches;
use crate::models::punch::Punch;
use crate::utils::date::parse_range;
use chrono::NaiveDateTime;
use std::path::Path;

/// What a single exported record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportShape {
    Punches,
    Days,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export the punches selected by `range` (`None` or `"all"` for every
    /// stored punch, otherwise any period accepted by `parse_range`).
    ///
    /// Returns the number of records written; nothing is written when the
    /// selection is empty.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        path: &Path,
        range: Option<&str>,
        shape: ExportShape,
        now: NaiveDateTime,
    ) -> AppResult<usize> {
        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let punches = match bounds {
            None => load_all_punches(&pool.conn)?,
            Some((start, end)) => load_punches_between(&pool.conn, &start, &end)?,
        };

        if punches.is_empty() {
            return Ok(0);
        }

        let written = match shape {
            ExportShape::Punches => {
                let rows: Vec<PunchExport> = punches.iter().map(PunchExport::from).collect();
                write_rows(format, &rows, path)?
            }
            ExportShape::Days => {
                let rows: Vec<DayExport> = group_by_day(punches)
                    .iter()
                    .map(|d| DayExport::from_day(d, now))
                    .collect();
                write_rows(format, &rows, path)?
            }
        };

        ttlog_or_warn(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} {} as {}",
                written,
                if shape == ExportShape::Days { "days" } else { "punches" },
                format.as_str()
            ),
        );

        Ok(written)
    }
}

fn write_rows<T: ExportRow>(format: ExportFormat, rows: &[T], path: &Path) -> AppResult<usize> {
    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
        ExportFormat::Xlsx => export_xlsx(rows, path)?,
    }
    Ok(rows.len())
}

/// Punches arrive ordered by date, so consecutive runs form the days.
fn group_by_day(punches: Vec<Punch>) -> Vec<DayPunches> {
    let mut days: Vec<DayPunches> = Vec::new();
    for p in punches {
        match days.last_mut() {
            Some(day) if day.date == p.date => day.punches.push(p),
            _ => days.push(DayPunches::new(p.date, vec![p])),
        }
    }
    days
}

/// Reject relative output paths and unknown extensions early.
pub fn check_output_path(file: &str, format: ExportFormat) -> AppResult<&Path> {
    let path = Path::new(file);

    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "output file path must be absolute: {file}"
        )));
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(format.as_str()) => Ok(path),
        _ => Err(AppError::Export(format!(
            "file extension must be .{} for {} export",
            format.as_str(),
            format.as_str()
        ))),
    }
}

