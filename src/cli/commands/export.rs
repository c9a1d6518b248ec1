use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::logic::{ExportShape, check_output_path};
use crate::export::ExportLogic;
use crate::ui::messages::{info, warning};
use crate::ui::prompt::confirm;
use chrono::Local;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        days,
        force,
    } = cmd
    {
        let path = check_output_path(file, *format)?;

        if path.exists() && !*force {
            warning(format!("The file '{}' already exists.", path.display()));
            if !confirm("Overwrite?")? {
                info("Export cancelled: existing file not overwritten.");
                return Ok(());
            }
        }

        let pool = DbPool::open(&cfg.database)?;
        let shape = if *days {
            ExportShape::Days
        } else {
            ExportShape::Punches
        };

        let written = ExportLogic::export(
            &pool,
            *format,
            path,
            range.as_deref(),
            shape,
            Local::now().naive_local(),
        )?;

        if written == 0 {
            warning("No punches found for selected range.");
        }
    }
    Ok(())
}
