use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::manual::{ManualLogic, ManualOutcome};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::time::parse_manual_time;

/// Handle the `add` command: a punch typed in by hand for any date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        kind,
        time,
        replace,
    } = cmd
    {
        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let t = parse_manual_time(time)?;

        let mut pool = DbPool::open(&cfg.database)?;

        match ManualLogic::apply(&mut pool, d, *kind, t, *replace)? {
            ManualOutcome::Inserted => success(format!(
                "{} added on {} at {}",
                kind,
                d,
                t.format("%H:%M")
            )),
            ManualOutcome::Replaced => success(format!(
                "{} on {} moved to {}",
                kind,
                d,
                t.format("%H:%M")
            )),
        }
    }
    Ok(())
}
