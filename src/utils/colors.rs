/// ANSI color helper utilities for terminal output.
use crate::core::calculator::weekly::GoalRating;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s` once colors are removed.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Returns a grey placeholder when the field is empty.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "00:00:00" {
        format!("{GREY}{}{RESET}", if v.is_empty() { "--:--" } else { v })
    } else {
        value.to_string()
    }
}

/// Green for work-opening punches, red for work-closing ones.
pub fn colorize_punch(value: &str, opens_work: bool) -> String {
    if value.trim().is_empty() {
        return colorize_optional(value);
    }
    if opens_work {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

pub fn color_for_rating(rating: Option<GoalRating>) -> &'static str {
    match rating {
        Some(GoalRating::Reached) => GREEN,
        Some(GoalRating::Close) => YELLOW,
        Some(GoalRating::Below) => RED,
        None => RESET,
    }
}
