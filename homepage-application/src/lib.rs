// Homepage Application Layer

pub mod error;
pub mod metrics;
pub mod state;
pub mod widgets;

pub use error::AppError;
pub use metrics::Metrics;
pub use state::AppState;
pub use widgets::{render_all_widgets, WidgetOutcome, WidgetReport};
