// Player profile entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::unix_to_utc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerProfile {
    #[serde(default)]
    pub last_online: Option<i64>,
}

impl PlayerProfile {
    pub fn last_online_at(&self) -> Option<DateTime<Utc>> {
        self.last_online.and_then(unix_to_utc)
    }
}
