// Activity event entity
// One entry of the public source-control event feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub created_at: DateTime<Utc>,
}
