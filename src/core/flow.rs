//! Punch flow validation.
//!
//! A day is a fixed sequence: Clock-In, optionally a Lunch-Out / Lunch-In
//! break, then Clock-Out. The live path enforces that sequence strictly;
//! the manual path only enforces prerequisites so history can be repaired.

use crate::models::punch_type::PunchType;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("a Clock-In is already registered")]
    DuplicateClockIn,

    #[error("Clock-In must be the first punch of the day")]
    OutOfOrder,

    #[error("no Clock-In registered yet")]
    MissingClockIn,

    #[error("a Lunch-Out is already registered")]
    DuplicateLunchOut,

    #[error("the day is already closed by a Clock-Out")]
    DayAlreadyClosed,

    #[error("no Lunch-Out registered yet")]
    MissingLunchOut,

    #[error("a Lunch-In is already registered")]
    DuplicateLunchIn,

    #[error("a Clock-Out is already registered")]
    DuplicateClockOut,

    #[error("the lunch break is still open, register Lunch-In first")]
    OpenLunchBreak,

    #[error("this punch already exists, delete it first or use --replace")]
    AlreadyExists,

    #[error("unknown punch type '{0}' (use in, lunch-out, lunch-in or out)")]
    UnknownPunchType(String),
}

/// Which rule set applies to a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlowMode {
    /// Punch stamped with the current time.
    Live,
    /// Punch typed in by hand for any date.
    Manual,
}

/// Decide whether a live punch of type `candidate` may be registered.
pub fn can_register(
    existing: &BTreeSet<PunchType>,
    candidate: PunchType,
) -> Result<(), FlowError> {
    validate(existing, candidate, FlowMode::Live)
}

/// Relaxed variant used when editing history by hand.
pub fn can_register_manual(
    existing: &BTreeSet<PunchType>,
    candidate: PunchType,
) -> Result<(), FlowError> {
    validate(existing, candidate, FlowMode::Manual)
}

fn validate(
    existing: &BTreeSet<PunchType>,
    candidate: PunchType,
    mode: FlowMode,
) -> Result<(), FlowError> {
    use PunchType::*;

    let has = |t: PunchType| existing.contains(&t);

    if mode == FlowMode::Manual {
        if has(candidate) {
            return Err(FlowError::AlreadyExists);
        }
        return match candidate {
            ClockIn => Ok(()),
            LunchOut | ClockOut if !has(ClockIn) => Err(FlowError::MissingClockIn),
            LunchIn if !has(LunchOut) => Err(FlowError::MissingLunchOut),
            _ => Ok(()),
        };
    }

    match candidate {
        ClockIn => {
            if has(ClockIn) {
                return Err(FlowError::DuplicateClockIn);
            }
            if !existing.is_empty() {
                return Err(FlowError::OutOfOrder);
            }
        }
        LunchOut => {
            if !has(ClockIn) {
                return Err(FlowError::MissingClockIn);
            }
            if has(LunchOut) {
                return Err(FlowError::DuplicateLunchOut);
            }
            if has(ClockOut) {
                return Err(FlowError::DayAlreadyClosed);
            }
        }
        LunchIn => {
            if !has(LunchOut) {
                return Err(FlowError::MissingLunchOut);
            }
            if has(LunchIn) {
                return Err(FlowError::DuplicateLunchIn);
            }
            if has(ClockOut) {
                return Err(FlowError::DayAlreadyClosed);
            }
        }
        ClockOut => {
            if !has(ClockIn) {
                return Err(FlowError::MissingClockIn);
            }
            if has(ClockOut) {
                return Err(FlowError::DuplicateClockOut);
            }
            if has(LunchOut) && !has(LunchIn) {
                return Err(FlowError::OpenLunchBreak);
            }
        }
    }

    Ok(())
}

/// Punch types that can be registered right now through the live path.
pub fn enabled_types(existing: &BTreeSet<PunchType>) -> BTreeSet<PunchType> {
    use PunchType::*;

    let has = |t: PunchType| existing.contains(&t);

    if !has(ClockIn) {
        return BTreeSet::from([ClockIn]);
    }
    if has(ClockOut) {
        return BTreeSet::new();
    }
    if has(LunchOut) && !has(LunchIn) {
        return BTreeSet::from([LunchIn]);
    }

    BTreeSet::from([LunchOut, ClockOut])
}
