use crate::core::flow::FlowError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The four punches of a working day, in the order they are expected to happen.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PunchType {
    ClockIn,
    LunchOut,
    LunchIn,
    ClockOut,
}

impl PunchType {
    pub const ALL: [PunchType; 4] = [
        PunchType::ClockIn,
        PunchType::LunchOut,
        PunchType::LunchIn,
        PunchType::ClockOut,
    ];

    /// Human readable label, used in tables and messages.
    pub fn label(&self) -> &'static str {
        match self {
            PunchType::ClockIn => "Clock-In",
            PunchType::LunchOut => "Lunch-Out",
            PunchType::LunchIn => "Lunch-In",
            PunchType::ClockOut => "Clock-Out",
        }
    }

    /// Short CLI code.
    pub fn code(&self) -> &'static str {
        match self {
            PunchType::ClockIn => "in",
            PunchType::LunchOut => "lunch-out",
            PunchType::LunchIn => "lunch-in",
            PunchType::ClockOut => "out",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchType::ClockIn => "clock_in",
            PunchType::LunchOut => "lunch_out",
            PunchType::LunchIn => "lunch_in",
            PunchType::ClockOut => "clock_out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "clock_in" => Some(PunchType::ClockIn),
            "lunch_out" => Some(PunchType::LunchOut),
            "lunch_in" => Some(PunchType::LunchIn),
            "clock_out" => Some(PunchType::ClockOut),
            _ => None,
        }
    }

    /// Helper: convert user input (codes, labels or DB names, any case).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().replace('_', "-").as_str() {
            "in" | "clock-in" | "clockin" => Some(PunchType::ClockIn),
            "lunch-out" | "lunch" | "lunchout" => Some(PunchType::LunchOut),
            "lunch-in" | "back" | "lunchin" => Some(PunchType::LunchIn),
            "out" | "clock-out" | "clockout" => Some(PunchType::ClockOut),
            _ => None,
        }
    }

    /// Punches of this type open a paid work span.
    pub fn opens_work(&self) -> bool {
        matches!(self, PunchType::ClockIn | PunchType::LunchIn)
    }
}

impl fmt::Display for PunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PunchType {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PunchType::from_code(s).ok_or_else(|| FlowError::UnknownPunchType(s.to_string()))
    }
}
