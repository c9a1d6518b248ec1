use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::{DayStatus, StatusLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, RESET, colorize_punch};
use crate::utils::date::weekday_str;
use crate::utils::formatting::{bold, format_hms};
use crate::utils::table::Table;
use chrono::Local;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Handle the `status` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { watch } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        let status = StatusLogic::snapshot(&pool, Local::now().naive_local())?;
        print_status(&status, cfg);

        if *watch && status.reconstruction.is_ongoing {
            watch_loop(&pool)?;
        }
    }
    Ok(())
}

fn print_status(status: &DayStatus, cfg: &Config) {
    let date = status.day.date;
    match weekday_str(date, &cfg.show_weekday) {
        Some(wd) => header(format!("Today {} ({})", date, wd)),
        None => header(format!("Today {}", date)),
    }

    if status.day.is_empty() {
        println!("{}No punches yet.{}", GREY, RESET);
    } else {
        let mut table = Table::new(["Punch", "Time", "Source"]);
        for p in &status.day.punches {
            table.add_row(vec![
                p.punch_type.label().to_string(),
                colorize_punch(&p.time_short(), p.punch_type.opens_work()),
                p.source.clone(),
            ]);
        }
        print!("{}", table.render(&cfg.separator_char));
    }

    println!();
    println!("{}", worked_line(status));

    let next: Vec<&str> = status.enabled.iter().map(|t| t.code()).collect();
    if next.is_empty() {
        println!("Next punch: {}day closed{}", GREY, RESET);
    } else {
        println!("Next punch: {}", next.join(", "));
    }
}

fn worked_line(status: &DayStatus) -> String {
    let rec = &status.reconstruction;
    let worked = format_hms(rec.worked());

    match rec.ongoing_start {
        Some(start) if rec.is_ongoing => format!(
            "⏱  Worked today: {} {}(working since {}){}",
            bold(&worked),
            GREEN,
            start.format("%H:%M"),
            RESET
        ),
        _ => format!("   Worked today: {}", bold(&worked)),
    }
}

/// Re-read and re-reconstruct once per second, rewriting the counter line,
/// until no span is open any more.
fn watch_loop(pool: &DbPool) -> AppResult<()> {
    println!("{}(Ctrl+C to stop){}", GREY, RESET);

    loop {
        thread::sleep(Duration::from_secs(1));

        let status = StatusLogic::snapshot(pool, Local::now().naive_local())?;
        print!("\r{}", worked_line(&status));
        io::stdout().flush()?;

        if !status.reconstruction.is_ongoing {
            println!();
            return Ok(());
        }
    }
}
