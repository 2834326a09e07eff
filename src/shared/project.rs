//! Project Data Structures
//!
//! A project is one user's saved canvas. The canvas state is opaque JSON owned
//! by the browser editor; the backend only checks that it is an object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: i32 = 800;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: i32 = 600;
/// Largest accepted canvas dimension
pub const MAX_DIMENSION: i32 = 10_000;

/// A stored project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project ID
    pub id: Uuid,
    /// Owning user ID
    pub user_id: Uuid,
    /// Display title
    pub title: String,
    /// Editor canvas state
    pub canvas_data: Value,
    /// Base64 encoded preview image
    pub thumbnail: Option<String>,
    /// Canvas width in pixels
    pub width: i32,
    /// Canvas height in pixels
    pub height: i32,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Build a new project owned by `user_id` from a create request
    pub fn new(user_id: Uuid, request: ProjectCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: request.title.trim().to_string(),
            canvas_data: request.canvas_data,
            thumbnail: None,
            width: request.width,
            height: request.height,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the fields present in `update`
    pub fn apply(&mut self, update: &ProjectUpdate, now: DateTime<Utc>) {
        if let Some(title) = &update.title {
            self.title = title.trim().to_string();
        }
        if let Some(canvas_data) = &update.canvas_data {
            self.canvas_data = canvas_data.clone();
        }
        if let Some(thumbnail) = &update.thumbnail {
            self.thumbnail = Some(thumbnail.clone());
        }
        if let Some(width) = update.width {
            self.width = width;
        }
        if let Some(height) = update.height {
            self.height = height;
        }
        self.updated_at = now;
    }
}

fn empty_canvas() -> Value {
    Value::Object(serde_json::Map::new())
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

/// Create project request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub title: String,
    #[serde(default = "empty_canvas")]
    pub canvas_data: Value,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
}

impl ProjectCreate {
    /// Check title, canvas and dimensions
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_title(&self.title)?;
        validate_canvas(&self.canvas_data)?;
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)
    }
}

/// Partial project update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub canvas_data: Option<Value>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
}

impl ProjectUpdate {
    /// Check the fields that are present
    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(canvas_data) = &self.canvas_data {
            validate_canvas(canvas_data)?;
        }
        if let Some(width) = self.width {
            validate_dimension("width", width)?;
        }
        if let Some(height) = self.height {
            validate_dimension("height", height)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), SharedError> {
    if title.trim().is_empty() {
        return Err(SharedError::validation("title", "Title must not be empty"));
    }
    Ok(())
}

fn validate_canvas(canvas_data: &Value) -> Result<(), SharedError> {
    if !canvas_data.is_object() {
        return Err(SharedError::validation(
            "canvas_data",
            "Canvas data must be a JSON object",
        ));
    }
    Ok(())
}

fn validate_dimension(field: &'static str, value: i32) -> Result<(), SharedError> {
    if !(1..=MAX_DIMENSION).contains(&value) {
        return Err(SharedError::validation(
            field,
            format!("{} must be between 1 and {}", field, MAX_DIMENSION),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_defaults() {
        let request: ProjectCreate = serde_json::from_value(json!({ "title": "Poster" })).unwrap();
        assert_eq!(request.canvas_data, json!({}));
        assert_eq!(request.width, DEFAULT_WIDTH);
        assert_eq!(request.height, DEFAULT_HEIGHT);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let request: ProjectCreate = serde_json::from_value(json!({ "title": "   " })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_rejects_non_object_canvas() {
        let request: ProjectCreate =
            serde_json::from_value(json!({ "title": "Poster", "canvas_data": [1, 2] })).unwrap();
        assert_eq!(
            request.validate().unwrap_err(),
            SharedError::validation("canvas_data", "Canvas data must be a JSON object")
        );
    }

    #[test]
    fn test_update_rejects_zero_width() {
        let update = ProjectUpdate {
            width: Some(0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let owner = Uuid::new_v4();
        let mut project = Project::new(
            owner,
            ProjectCreate {
                title: "Before".to_string(),
                canvas_data: json!({ "objects": [] }),
                width: 800,
                height: 600,
            },
        );
        let created_at = project.created_at;
        let later = created_at + chrono::Duration::seconds(5);

        project.apply(
            &ProjectUpdate {
                title: Some("After".to_string()),
                thumbnail: Some("data:image/png;base64,AAAA".to_string()),
                ..Default::default()
            },
            later,
        );

        assert_eq!(project.title, "After");
        assert_eq!(project.canvas_data, json!({ "objects": [] }));
        assert_eq!(project.width, 800);
        assert_eq!(project.thumbnail.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(project.created_at, created_at);
        assert_eq!(project.updated_at, later);
    }
}
