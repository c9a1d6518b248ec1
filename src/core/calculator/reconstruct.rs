//! Rebuild the worked time of a day from its punches.
//!
//! Punches may arrive in any order and may not respect the live flow (manual
//! edits can produce anything), so the replay below never fails: it sorts
//! what it can parse, walks the sequence with a cursor and sums the paid
//! spans it recognizes.

use crate::models::punch_type::PunchType;
use crate::utils::time::parse_punch_time;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// A contiguous interval of paid work. `end == None` means still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSpan {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl WorkSpan {
    fn closed(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    fn open(start: NaiveDateTime) -> Self {
        Self { start, end: None }
    }

    /// Length of the span; open spans are measured up to `now`.
    pub fn duration(&self, now: NaiveDateTime) -> Duration {
        self.end.unwrap_or(now) - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reconstruction {
    pub total_worked_seconds: f64,
    pub is_ongoing: bool,
    pub ongoing_start: Option<NaiveDateTime>,
    pub spans: Vec<WorkSpan>,
}

impl Reconstruction {
    /// Whole seconds, for `HH:MM:SS` displays.
    pub fn worked(&self) -> Duration {
        Duration::seconds(self.total_worked_seconds as i64)
    }
}

/// Index of the first entry at or after `from` whose type matches.
fn find_next<F>(timeline: &[(PunchType, NaiveDateTime)], from: usize, pred: F) -> Option<usize>
where
    F: Fn(PunchType) -> bool,
{
    (from..timeline.len()).find(|&j| pred(timeline[j].0))
}

/// Replay the punches of `date` as seen at instant `now`.
pub fn reconstruct(
    entries: &[(PunchType, &str)],
    date: NaiveDate,
    now: NaiveDateTime,
) -> Reconstruction {
    use PunchType::*;

    // -----------------------------
    // Parse and sort chronologically
    // -----------------------------
    let mut timeline: Vec<(PunchType, NaiveDateTime)> = entries
        .iter()
        .filter_map(|(kind, raw)| parse_punch_time(raw).map(|t| (*kind, date.and_time(t))))
        .collect();
    timeline.sort_by_key(|(_, at)| *at);

    let mut spans = Vec::new();
    let mut ongoing_start = None;

    // -----------------------------
    // Replay
    // -----------------------------
    let mut i = 0;
    while i < timeline.len() {
        let (kind, at) = timeline[i];

        match kind {
            ClockIn => match find_next(&timeline, i + 1, |t| matches!(t, LunchOut | ClockOut)) {
                Some(j) if timeline[j].0 == LunchOut => {
                    spans.push(WorkSpan::closed(at, timeline[j].1));

                    // Resume from the return of lunch; no return means an open break.
                    match find_next(&timeline, j + 1, |t| t == LunchIn) {
                        Some(k) => {
                            i = k;
                            continue;
                        }
                        None => break,
                    }
                }
                Some(j) => {
                    spans.push(WorkSpan::closed(at, timeline[j].1));
                    break;
                }
                None => {
                    spans.push(WorkSpan::open(at));
                    ongoing_start = Some(at);
                    break;
                }
            },
            LunchIn => {
                match find_next(&timeline, i + 1, |t| t == ClockOut) {
                    Some(j) => spans.push(WorkSpan::closed(at, timeline[j].1)),
                    None => {
                        spans.push(WorkSpan::open(at));
                        ongoing_start = Some(at);
                    }
                }
                break;
            }
            // orphaned Lunch-Out / Clock-Out
            LunchOut | ClockOut => {}
        }

        i += 1;
    }

    let total: Duration = spans
        .iter()
        .map(|span| span.duration(now))
        .fold(Duration::zero(), |acc, d| acc + d);
    let total_worked_seconds = (total.num_milliseconds() as f64 / 1000.0).max(0.0);

    Reconstruction {
        total_worked_seconds,
        is_ongoing: ongoing_start.is_some(),
        ongoing_start,
        spans,
    }
}

/// Live counter for today, evaluated against the wall clock.
pub fn reconstruct_today(entries: &[(PunchType, &str)]) -> Reconstruction {
    let now = Local::now().naive_local();
    reconstruct(entries, now.date(), now)
}
