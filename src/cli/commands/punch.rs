use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Local;

/// Handle the `punch` command: register `kind` at the current local time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { kind } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let now = Local::now().naive_local();

        let punch = PunchLogic::register(&mut pool, *kind, now)?;

        success(format!(
            "{} registered on {} at {}",
            punch.punch_type,
            punch.date_str(),
            punch.time_short()
        ));
    }
    Ok(())
}
