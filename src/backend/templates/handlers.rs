/**
 * Template Handlers
 *
 * Public, read-only endpoints over the template catalog:
 *
 * - `GET /api/templates` - every template
 * - `GET /api/templates/categories` - distinct category names
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::templates::store::TemplateStore;
use crate::shared::{Template, TemplateCategories};

/// List all templates
pub async fn list_templates(
    State(templates): State<Arc<dyn TemplateStore>>,
) -> Result<Json<Vec<Template>>, BackendError> {
    let templates = templates.list().await?;
    tracing::debug!("Listing {} templates", templates.len());
    Ok(Json(templates))
}

/// List distinct template categories
pub async fn list_categories(
    State(templates): State<Arc<dyn TemplateStore>>,
) -> Result<Json<TemplateCategories>, BackendError> {
    let categories = templates.categories().await?;
    Ok(Json(TemplateCategories { categories }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::templates::store::MemoryTemplateStore;
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_list_categories() {
        let store: Arc<dyn TemplateStore> = Arc::new(MemoryTemplateStore::with_templates(vec![
            Template {
                id: Uuid::new_v4(),
                title: "Banner".to_string(),
                category: "web".to_string(),
                canvas_data: serde_json::json!({}),
                thumbnail: String::new(),
                width: 1200,
                height: 400,
                is_premium: true,
                created_at: Utc::now(),
            },
        ]));

        let Json(body) = list_categories(State(store.clone())).await.unwrap();
        assert_eq!(body.categories, vec!["web"]);

        let Json(templates) = list_templates(State(store)).await.unwrap();
        assert_eq!(templates.len(), 1);
        assert!(templates[0].is_premium);
    }
}
