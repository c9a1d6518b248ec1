pub mod backup;
pub mod calculator;
pub mod del;
pub mod flow;
pub mod log;
pub mod manual;
pub mod punch;
pub mod status;
pub mod week;
