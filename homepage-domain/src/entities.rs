// Domain entities
pub mod activity;
pub mod player_profile;
pub mod project;
pub mod runtime_config;
pub mod streak;

pub use activity::*;
pub use player_profile::*;
pub use project::*;
pub use runtime_config::*;
pub use streak::*;
