use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::ui::prompt::confirm;
use std::path::Path;

/// Handle the `backup` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;

        let overwrite = if Path::new(file).exists() && !*force {
            warning(format!("The file '{}' already exists.", file));
            if !confirm("Overwrite it?")? {
                info("Backup cancelled.");
                return Ok(());
            }
            true
        } else {
            *force
        };

        BackupLogic::backup(&pool, file, *compress, overwrite)?;
    }
    Ok(())
}
