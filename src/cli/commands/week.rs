use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::weekly::{WeekStatus, WeekSummary};
use crate::core::week::WeekLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::chart::render_week_chart;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date::{parse_date, today};
use crate::utils::formatting::format_hours;
use chrono::Local;

/// Handle the `week` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date, no_chart } = cmd {
        let d = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => today(),
        };

        let pool = DbPool::open(&cfg.database)?;
        let summary = WeekLogic::summary(&pool, cfg, d, Local::now().naive_local())?;

        header(format!("Week of {}", summary.start));
        print_totals(&summary);

        if !*no_chart {
            println!();
            print!("{}", render_week_chart(&summary, &cfg.show_weekday));
        }
    }
    Ok(())
}

fn print_totals(summary: &WeekSummary) {
    println!(
        "Worked: {} / goal {} ({:.0}%)",
        format_hours(summary.total_hours()),
        format_hours(summary.goal_hours),
        summary.percentage()
    );

    match summary.status() {
        WeekStatus::NotStarted => info(format!(
            "Must reach {:.2} hours this week.",
            summary.goal_hours
        )),
        WeekStatus::Remaining(h) => warning(format!("{:.2} hours remaining until goal.", h)),
        WeekStatus::Completed => success("Weekly goal completed!"),
    }
}
