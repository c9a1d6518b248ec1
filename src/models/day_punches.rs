use super::{punch::Punch, punch_type::PunchType};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// All the punches recorded for one calendar day, in storage order.
#[derive(Debug, Clone)]
pub struct DayPunches {
    pub date: NaiveDate,
    pub punches: Vec<Punch>,
}

impl DayPunches {
    pub fn new(date: NaiveDate, punches: Vec<Punch>) -> Self {
        Self { date, punches }
    }

    pub fn is_empty(&self) -> bool {
        self.punches.is_empty()
    }

    /// Set of punch types already present, as consumed by the flow validator.
    pub fn existing_types(&self) -> BTreeSet<PunchType> {
        self.punches.iter().map(|p| p.punch_type).collect()
    }

    /// `(type, raw time)` pairs, as consumed by the reconstructor.
    pub fn entries(&self) -> Vec<(PunchType, &str)> {
        self.punches
            .iter()
            .map(|p| (p.punch_type, p.time.as_str()))
            .collect()
    }

    /// Punch of the given type. When a type is duplicated the last one wins.
    pub fn get(&self, punch_type: PunchType) -> Option<&Punch> {
        self.punches.iter().rev().find(|p| p.punch_type == punch_type)
    }
}
