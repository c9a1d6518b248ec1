use crate::core::calculator::reconstruct::reconstruct;
use crate::core::calculator::worked_hours::{calculate_worked_hours, to_hours};
use crate::models::day_punches::DayPunches;
use crate::models::punch_type::PunchType;
use chrono::{Duration, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone)]
pub struct DayHours {
    pub date: NaiveDate,
    pub worked: Duration,
    /// Still counting (today, not clocked out yet).
    pub live: bool,
}

impl DayHours {
    pub fn hours(&self) -> f64 {
        to_hours(self.worked)
    }
}

/// How a day compares to the daily goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalRating {
    Reached,
    Close,
    Below,
}

/// Outcome of the week against the weekly goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeekStatus {
    NotStarted,
    Remaining(f64),
    Completed,
}

#[derive(Debug, Clone)]
pub struct WeekSummary {
    pub start: NaiveDate,
    pub days: Vec<DayHours>,
    pub goal_hours: f64,
}

impl WeekSummary {
    pub fn total_hours(&self) -> f64 {
        self.days.iter().map(DayHours::hours).sum()
    }

    pub fn daily_goal_hours(&self) -> f64 {
        if self.days.is_empty() {
            0.0
        } else {
            self.goal_hours / self.days.len() as f64
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.goal_hours > 0.0 {
            self.total_hours() / self.goal_hours * 100.0
        } else {
            0.0
        }
    }

    pub fn remaining_hours(&self) -> f64 {
        (self.goal_hours - self.total_hours()).max(0.0)
    }

    pub fn status(&self) -> WeekStatus {
        let remaining = self.remaining_hours();
        if self.total_hours() == 0.0 {
            WeekStatus::NotStarted
        } else if remaining > 0.0 {
            WeekStatus::Remaining(remaining)
        } else {
            WeekStatus::Completed
        }
    }

    pub fn rating(&self, day: &DayHours) -> Option<GoalRating> {
        rate_day(day.hours(), self.daily_goal_hours())
    }
}

/// `None` when there is no goal to compare against.
pub fn rate_day(hours: f64, daily_goal: f64) -> Option<GoalRating> {
    if daily_goal <= 0.0 {
        return None;
    }
    let pct = hours / daily_goal;
    Some(if pct >= 1.0 {
        GoalRating::Reached
    } else if pct >= 0.8 {
        GoalRating::Close
    } else {
        GoalRating::Below
    })
}

/// Worked time of one day as seen at `now`.
///
/// Today, while the day is not clocked out, the live reconstruction is used so
/// the figure keeps growing; every other day is computed as a closed day.
pub fn day_hours(day: &DayPunches, now: NaiveDateTime) -> DayHours {
    let entries = day.entries();

    if day.date == now.date() && !day.existing_types().contains(&PunchType::ClockOut) {
        let rec = reconstruct(&entries, day.date, now);
        return DayHours {
            date: day.date,
            worked: rec.worked(),
            live: rec.is_ongoing,
        };
    }

    DayHours {
        date: day.date,
        worked: calculate_worked_hours(&entries),
        live: false,
    }
}

/// Build the summary for a work week. `days` must be ordered from `start`.
pub fn summarize_week(
    start: NaiveDate,
    days: &[DayPunches],
    goal_hours: f64,
    now: NaiveDateTime,
) -> WeekSummary {
    WeekSummary {
        start,
        days: days.iter().map(|d| day_hours(d, now)).collect(),
        goal_hours,
    }
}
