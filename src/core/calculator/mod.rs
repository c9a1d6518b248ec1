pub mod reconstruct;
pub mod weekly;
pub mod worked_hours;
