//! Template catalog entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A read-only starting design offered to every user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub canvas_data: Value,
    /// Base64 encoded preview image
    pub thumbnail: String,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
}

/// Response body for `GET /api/templates/categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCategories {
    pub categories: Vec<String>,
}
