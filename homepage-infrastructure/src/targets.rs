pub mod fragment_target;
pub mod html_page;

pub use fragment_target::*;
pub use html_page::*;
