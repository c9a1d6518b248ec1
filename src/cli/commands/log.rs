use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Nothing to do: use `rpunch log --print`.");
            return Ok(());
        }

        let pool = DbPool::open(&cfg.database)?;
        LogLogic::print_log(&pool)?;
    }
    Ok(())
}
