pub mod clients;
pub mod config;
pub mod targets;
pub mod utils;

pub use clients::*;
pub use config::*;
pub use targets::*;
pub use utils::*;
