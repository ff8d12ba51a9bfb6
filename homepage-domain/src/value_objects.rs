// Domain value objects
pub mod container_id;
pub mod widget_kind;

pub use container_id::*;
pub use widget_kind::*;
