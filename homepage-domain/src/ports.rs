// Source and render target port traits (interfaces)
// Define what the domain needs from infrastructure

pub mod render_target;
pub mod sources;

pub use render_target::*;
pub use sources::*;
