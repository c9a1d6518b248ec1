use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use crate::utils::date::parse_date;

/// Handle the `del` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, kind, yes } = cmd {
        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let mut pool = DbPool::open(&cfg.database)?;

        if !*yes {
            let question = match kind {
                Some(k) => format!("Delete the {} punch of {}?", k, d),
                None => format!("Delete ALL punches of {}?", d),
            };
            warning(&question);
            if !confirm("Proceed")? {
                info("Deletion cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&mut pool, d, *kind)?;

        match kind {
            Some(k) => success(format!("{} punch of {} deleted.", k, d)),
            None => success(format!("{} punch(es) of {} deleted.", removed, d)),
        }
    }
    Ok(())
}
