use serde::{Deserialize, Serialize};

/// Lifecycle data the backend attaches to every stored record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Optimistic locking version, echoed back on update
    #[serde(default)]
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// `updated_at` rendered for tables and detail panels
    pub fn updated_label(&self) -> String {
        self.updated_at.format("%d/%m/%Y %H:%M").to_string()
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
