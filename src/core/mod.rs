pub mod calculator;
pub mod catalog;
pub mod dose;
pub mod log;
