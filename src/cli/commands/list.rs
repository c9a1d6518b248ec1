use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::weekly::day_hours;
use crate::db::pool::DbPool;
use crate::db::queries::load_days;
use crate::errors::{AppResult, StorageContext};
use crate::models::day_punches::DayPunches;
use crate::models::punch_type::PunchType;
use crate::ui::messages::warning;
use crate::utils::colors::{colorize_optional, colorize_punch};
use crate::utils::date::{self, days_between, parse_range, weekday_str};
use crate::utils::formatting::secs2readable;
use crate::utils::table::Table;
use chrono::{Local, NaiveDateTime};

/// Handle the `list` command: one row per day with punches.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, today } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        let (start, end) = if *today {
            let t = date::today();
            (t, t)
        } else {
            match period {
                Some(p) => parse_range(p)?,
                None => date::current_month_bounds(),
            }
        };

        let days: Vec<DayPunches> = load_days(&pool.conn, &days_between(start, end))
            .storage("list punches", &start)?
            .into_iter()
            .filter(|d| !d.is_empty())
            .collect();

        if days.is_empty() {
            warning(format!("No punches found between {} and {}.", start, end));
            return Ok(());
        }

        let now = Local::now().naive_local();
        print!("{}", build_table(&days, cfg, now).render(&cfg.separator_char));
    }
    Ok(())
}

fn build_table(days: &[DayPunches], cfg: &Config, now: NaiveDateTime) -> Table {
    let mut headers = vec!["Date".to_string()];
    headers.extend(PunchType::ALL.iter().map(|t| t.label().to_string()));
    headers.push("Worked".to_string());

    let mut table = Table::new(headers);

    for day in days {
        let label = match weekday_str(day.date, &cfg.show_weekday) {
            Some(wd) => format!("{} {}", day.date, wd),
            None => day.date.to_string(),
        };

        let mut row = vec![label];
        for t in PunchType::ALL {
            let cell = day
                .get(t)
                .map(|p| colorize_punch(&p.time_short(), t.opens_work()))
                .unwrap_or_else(|| colorize_optional(""));
            row.push(cell);
        }

        let hours = day_hours(day, now);
        let mut worked = secs2readable(hours.worked.num_seconds(), false, false);
        if hours.live {
            worked.push_str(" ⏱");
        }
        row.push(worked);

        table.add_row(row);
    }

    table
}
