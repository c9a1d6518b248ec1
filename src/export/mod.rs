// src/export/mod.rs

mod excel_date;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{DayExport, PunchExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// A flat record that every export format knows how to write.
pub trait ExportRow: Serialize {
    fn headers() -> &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}
