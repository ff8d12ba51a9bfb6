// Streak entity

use serde::Serialize;

/// Consecutive active days ending today or yesterday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub days: u32,
    /// Today itself has activity, so the streak is still running.
    pub open: bool,
}
