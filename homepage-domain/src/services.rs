// Domain services: pure formatting and calculation, no I/O
pub mod fragments;
pub mod sanitize;
pub mod streak_calculator;
pub mod time_format;

pub use fragments::*;
pub use sanitize::*;
pub use streak_calculator::*;
pub use time_format::*;
