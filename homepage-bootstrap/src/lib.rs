pub mod context;
pub mod lifecycle;
pub mod logging;

pub use lifecycle::{run, OutputMode, RunOptions};
