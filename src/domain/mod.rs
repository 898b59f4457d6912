pub mod outcome;
pub mod ports;
