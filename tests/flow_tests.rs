use rpunch::core::flow::{FlowError, can_register, can_register_manual, enabled_types};
use rpunch::models::punch_type::PunchType::{self, *};
use std::collections::BTreeSet;

fn set(types: &[PunchType]) -> BTreeSet<PunchType> {
    types.iter().copied().collect()
}

#[test]
fn empty_day_only_allows_clock_in() {
    let empty = set(&[]);

    assert_eq!(enabled_types(&empty), set(&[ClockIn]));
    assert_eq!(can_register(&empty, ClockIn), Ok(()));
    assert_eq!(can_register(&empty, LunchOut), Err(FlowError::MissingClockIn));
    assert_eq!(can_register(&empty, LunchIn), Err(FlowError::MissingLunchOut));
    assert_eq!(can_register(&empty, ClockOut), Err(FlowError::MissingClockIn));
}

#[test]
fn full_live_cycle_is_accepted() {
    let mut existing = BTreeSet::new();
    for next in [ClockIn, LunchOut, LunchIn, ClockOut] {
        assert!(enabled_types(&existing).contains(&next));
        assert_eq!(can_register(&existing, next), Ok(()));
        existing.insert(next);
    }
    assert!(enabled_types(&existing).is_empty());
}

#[test]
fn live_path_never_admits_a_duplicate() {
    let all = set(&PunchType::ALL);
    for t in PunchType::ALL {
        assert!(can_register(&all, t).is_err(), "{t} accepted twice");
    }

    assert_eq!(
        can_register(&set(&[ClockIn]), ClockIn),
        Err(FlowError::DuplicateClockIn)
    );
    assert_eq!(
        can_register(&set(&[ClockIn, LunchOut]), LunchOut),
        Err(FlowError::DuplicateLunchOut)
    );
    assert_eq!(
        can_register(&set(&[ClockIn, LunchOut, LunchIn]), LunchIn),
        Err(FlowError::DuplicateLunchIn)
    );
    assert_eq!(
        can_register(&set(&[ClockIn, ClockOut]), ClockOut),
        Err(FlowError::DuplicateClockOut)
    );
}

#[test]
fn live_path_enforces_order() {
    // Clock-In after anything else
    assert_eq!(
        can_register(&set(&[LunchOut]), ClockIn),
        Err(FlowError::OutOfOrder)
    );
    // Lunch after the day is closed
    assert_eq!(
        can_register(&set(&[ClockIn, ClockOut]), LunchOut),
        Err(FlowError::DayAlreadyClosed)
    );
    assert_eq!(
        can_register(&set(&[ClockIn, LunchOut, ClockOut]), LunchIn),
        Err(FlowError::DayAlreadyClosed)
    );
    // Clock-Out during lunch
    assert_eq!(
        can_register(&set(&[ClockIn, LunchOut]), ClockOut),
        Err(FlowError::OpenLunchBreak)
    );
}

#[test]
fn enabled_types_follow_the_day() {
    assert_eq!(enabled_types(&set(&[ClockIn])), set(&[LunchOut, ClockOut]));
    assert_eq!(enabled_types(&set(&[ClockIn, LunchOut])), set(&[LunchIn]));
    assert_eq!(
        enabled_types(&set(&[ClockIn, LunchOut, LunchIn])),
        set(&[ClockOut])
    );
    assert!(enabled_types(&set(&[ClockIn, ClockOut])).is_empty());
}

#[test]
fn enabled_types_agree_with_can_register() {
    let days = [
        set(&[]),
        set(&[ClockIn]),
        set(&[ClockIn, LunchOut]),
        set(&[ClockIn, LunchOut, LunchIn]),
        set(&[ClockIn, ClockOut]),
        set(&[ClockIn, LunchOut, LunchIn, ClockOut]),
    ];
    for day in &days {
        let enabled = enabled_types(day);
        for t in PunchType::ALL {
            assert_eq!(enabled.contains(&t), can_register(day, t).is_ok());
        }
    }
}

#[test]
fn manual_path_only_checks_prerequisites() {
    // Clock-Out before lunch is fine when repairing history
    assert_eq!(can_register_manual(&set(&[ClockIn, LunchOut]), ClockOut), Ok(()));
    // Clock-In can be added to a day that already has later punches
    assert_eq!(can_register_manual(&set(&[ClockOut]), ClockIn), Ok(()));

    assert_eq!(
        can_register_manual(&set(&[]), LunchOut),
        Err(FlowError::MissingClockIn)
    );
    assert_eq!(
        can_register_manual(&set(&[ClockIn]), LunchIn),
        Err(FlowError::MissingLunchOut)
    );
    assert_eq!(
        can_register_manual(&set(&[ClockIn]), ClockIn),
        Err(FlowError::AlreadyExists)
    );
}

#[test]
fn punch_type_parses_cli_aliases() {
    assert_eq!("in".parse::<PunchType>(), Ok(ClockIn));
    assert_eq!("Clock-In".parse::<PunchType>(), Ok(ClockIn));
    assert_eq!("lunch".parse::<PunchType>(), Ok(LunchOut));
    assert_eq!("back".parse::<PunchType>(), Ok(LunchIn));
    assert_eq!("clock_out".parse::<PunchType>(), Ok(ClockOut));
    assert_eq!(
        "coffee".parse::<PunchType>(),
        Err(FlowError::UnknownPunchType("coffee".into()))
    );
}
