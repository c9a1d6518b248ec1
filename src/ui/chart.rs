//! Horizontal bar chart of the worked hours of a week.

use crate::core::calculator::weekly::WeekSummary;
use crate::utils::colors::{GREY, RESET, color_for_rating};
use crate::utils::date::weekday_str;
use crate::utils::formatting::format_hours;

const BAR_WIDTH: usize = 40;
const BAR: char = '█';
const GOAL_MARK: char = '┆';

fn scaled(hours: f64, scale: f64) -> usize {
    ((hours / scale) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize
}

/// Render one line per day, colored against the daily goal, plus a title
/// and a legend for the goal marker.
pub fn render_week_chart(summary: &WeekSummary, show_weekday: &str) -> String {
    let daily_goal = summary.daily_goal_hours();
    let max_hours = summary
        .days
        .iter()
        .map(|d| d.hours())
        .fold(daily_goal, f64::max);
    let scale = if max_hours > 0.0 { max_hours } else { 1.0 };
    let goal_col = (daily_goal > 0.0).then(|| scaled(daily_goal, scale).min(BAR_WIDTH - 1));

    let mut out = format!(
        "Worked Hours | Total: {} ({:.0}%)\n",
        format_hours(summary.total_hours()),
        summary.percentage()
    );

    let labels: Vec<String> = summary
        .days
        .iter()
        .map(|day| match weekday_str(day.date, show_weekday) {
            Some(wd) => format!("{} {}", wd, day.date),
            None => day.date.to_string(),
        })
        .collect();
    let label_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    for (day, label) in summary.days.iter().zip(&labels) {
        let len = scaled(day.hours(), scale);
        let mut bar = String::new();
        for col in 0..BAR_WIDTH {
            if col < len {
                bar.push(BAR);
            } else if Some(col) == goal_col {
                bar.push(GOAL_MARK);
            } else {
                bar.push(' ');
            }
        }

        let color = color_for_rating(summary.rating(day));
        let live = if day.live { " ⏱" } else { "" };

        out.push_str(&format!(
            "{:<label_w$} │{}{}{} {:>8}{}\n",
            label,
            color,
            bar,
            RESET,
            format_hours(day.hours()),
            live
        ));
    }

    if goal_col.is_some() {
        out.push_str(&format!(
            "{}{} Daily goal ({}){}\n",
            GREY,
            GOAL_MARK,
            format_hours(daily_goal),
            RESET
        ));
    }

    out
}
