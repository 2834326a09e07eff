//! Template catalog stores. The API never writes templates; the catalog is
//! populated out of band (SQL seed or `MemoryTemplateStore::with_templates`).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::StoreError;
use crate::shared::Template;

/// Most templates returned by a listing
pub const LIST_LIMIT: usize = 1000;

/// Read access to the template catalog
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// All templates, ordered by category then title
    async fn list(&self) -> Result<Vec<Template>, StoreError>;

    /// Distinct category names, sorted
    async fn categories(&self) -> Result<Vec<String>, StoreError>;
}

#[derive(Debug, sqlx::FromRow)]
struct TemplateRow {
    id: Uuid,
    title: String,
    category: String,
    canvas_data: Json<serde_json::Value>,
    thumbnail: String,
    width: i32,
    height: i32,
    is_premium: bool,
    created_at: DateTime<Utc>,
}

impl From<TemplateRow> for Template {
    fn from(row: TemplateRow) -> Self {
        Template {
            id: row.id,
            title: row.title,
            category: row.category,
            canvas_data: row.canvas_data.0,
            thumbnail: row.thumbnail,
            width: row.width,
            height: row.height,
            is_premium: row.is_premium,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL-backed template catalog
#[derive(Debug, Clone)]
pub struct PgTemplateStore {
    pool: PgPool,
}

impl PgTemplateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateStore for PgTemplateStore {
    async fn list(&self) -> Result<Vec<Template>, StoreError> {
        let rows = sqlx::query_as::<_, TemplateRow>(
            r#"
            SELECT id, title, category, canvas_data, thumbnail, width, height, is_premium, created_at
            FROM templates
            ORDER BY category, title
            LIMIT $1
            "#
        )
        .bind(LIST_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Template::from).collect())
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM templates ORDER BY category"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }
}

/// Fixed in-memory template catalog
#[derive(Debug, Default, Clone)]
pub struct MemoryTemplateStore {
    templates: Vec<Template>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding exactly `templates`
    pub fn with_templates(mut templates: Vec<Template>) -> Self {
        templates.sort_by(|a, b| (&a.category, &a.title).cmp(&(&b.category, &b.title)));
        Self { templates }
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn list(&self) -> Result<Vec<Template>, StoreError> {
        Ok(self.templates.iter().take(LIST_LIMIT).cloned().collect())
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        let mut categories: Vec<String> = self
            .templates
            .iter()
            .map(|template| template.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}
