// Project entity
// A published project as returned by the package registry

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub slug: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub downloads: u64,
    #[serde(default)]
    pub project_type: Option<String>,
}

impl Project {
    /// Path segment used by the registry site, `mod` when the API omits it.
    pub fn effective_project_type(&self) -> &str {
        match self.project_type.as_deref() {
            Some(kind) if !kind.trim().is_empty() => kind,
            _ => "mod",
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
