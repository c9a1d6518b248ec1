pub mod day_punches;
pub mod punch;
pub mod punch_type;
