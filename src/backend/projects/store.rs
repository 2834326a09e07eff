/**
 * Project Stores
 *
 * Every lookup and write here is keyed on both the project ID and the
 * owner's user ID, so a store call can never touch another user's project
 * even if a handler forgets to consult the guard first.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::error::StoreError;
use crate::shared::{Project, ProjectUpdate};

/// Most projects returned by a listing
pub const LIST_LIMIT: usize = 1000;

/// Persistence for projects
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Insert a new project
    async fn insert(&self, project: Project) -> Result<Project, StoreError>;

    /// All projects of one owner, most recently updated first
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, StoreError>;

    /// The project with `id` if it is owned by `owner_id`
    async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Project>, StoreError>;

    /// Apply `update` to the owned project; `None` if there is no such project
    async fn update_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        update: &ProjectUpdate,
        now: DateTime<Utc>,
    ) -> Result<Option<Project>, StoreError>;

    /// Delete the owned project; returns whether a row was removed
    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> Result<bool, StoreError>;
}

/// Row shape of the `projects` table
#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    canvas_data: Json<serde_json::Value>,
    thumbnail: Option<String>,
    width: i32,
    height: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            canvas_data: row.canvas_data.0,
            thumbnail: row.thumbnail,
            width: row.width,
            height: row.height,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const PROJECT_COLUMNS: &str =
    "id, user_id, title, canvas_data, thumbnail, width, height, created_at, updated_at";

/// PostgreSQL-backed project store
#[derive(Debug, Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn insert(&self, project: Project) -> Result<Project, StoreError> {
        let query = format!(
            r#"
            INSERT INTO projects ({PROJECT_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PROJECT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(project.id)
            .bind(project.user_id)
            .bind(&project.title)
            .bind(Json(&project.canvas_data))
            .bind(&project.thumbnail)
            .bind(project.width)
            .bind(project.height)
            .bind(project.created_at)
            .bind(project.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, StoreError> {
        let query = format!(
            r#"
            SELECT {PROJECT_COLUMNS}
            FROM projects
            WHERE user_id = $1
            ORDER BY updated_at DESC
            LIMIT $2
            "#
        );
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(owner_id)
            .bind(LIST_LIMIT as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Project>, StoreError> {
        let query = format!(
            r#"
            SELECT {PROJECT_COLUMNS}
            FROM projects
            WHERE id = $1 AND user_id = $2
            "#
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Project::from))
    }

    async fn update_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        update: &ProjectUpdate,
        now: DateTime<Utc>,
    ) -> Result<Option<Project>, StoreError> {
        let query = format!(
            r#"
            UPDATE projects
            SET title = COALESCE($3, title),
                canvas_data = COALESCE($4, canvas_data),
                thumbnail = COALESCE($5, thumbnail),
                width = COALESCE($6, width),
                height = COALESCE($7, height),
                updated_at = $8
            WHERE id = $1 AND user_id = $2
            RETURNING {PROJECT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(update.title.as_deref().map(str::trim))
            .bind(update.canvas_data.as_ref().map(Json))
            .bind(&update.thumbnail)
            .bind(update.width)
            .bind(update.height)
            .bind(now)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Project::from))
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// In-memory project store
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    projects: RwLock<HashMap<Uuid, Project>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn insert(&self, project: Project) -> Result<Project, StoreError> {
        let mut projects = self.projects.write().await;
        if projects.contains_key(&project.id) {
            return Err(StoreError::Conflict("id".to_string()));
        }
        projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Project>, StoreError> {
        let projects = self.projects.read().await;
        let mut owned: Vec<Project> = projects
            .values()
            .filter(|project| project.user_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        owned.truncate(LIST_LIMIT);
        Ok(owned)
    }

    async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Project>, StoreError> {
        let projects = self.projects.read().await;
        Ok(projects
            .get(&id)
            .filter(|project| project.user_id == owner_id)
            .cloned())
    }

    async fn update_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        update: &ProjectUpdate,
        now: DateTime<Utc>,
    ) -> Result<Option<Project>, StoreError> {
        let mut projects = self.projects.write().await;
        match projects.get_mut(&id) {
            Some(project) if project.user_id == owner_id => {
                project.apply(update, now);
                Ok(Some(project.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> Result<bool, StoreError> {
        let mut projects = self.projects.write().await;
        let owned = projects
            .get(&id)
            .is_some_and(|project| project.user_id == owner_id);
        if owned {
            projects.remove(&id);
        }
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ProjectCreate;
    use serde_json::json;

    fn project_for(owner: Uuid, title: &str) -> Project {
        Project::new(
            owner,
            ProjectCreate {
                title: title.to_string(),
                canvas_data: json!({}),
                width: 800,
                height: 600,
            },
        )
    }

    #[tokio::test]
    async fn test_find_owned_requires_matching_owner() {
        let store = MemoryProjectStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let project = store.insert(project_for(alice, "Poster")).await.unwrap();

        assert!(store.find_owned(project.id, alice).await.unwrap().is_some());
        assert!(store.find_owned(project.id, bob).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_scoped_and_ordered() {
        let store = MemoryProjectStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let mut older = project_for(alice, "Older");
        older.updated_at = older.updated_at - chrono::Duration::hours(1);
        store.insert(older).await.unwrap();
        store.insert(project_for(alice, "Newer")).await.unwrap();
        store.insert(project_for(bob, "Bob's")).await.unwrap();

        let listed = store.list_for_owner(alice).await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_scoped_to_owner() {
        let store = MemoryProjectStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let project = store.insert(project_for(alice, "Poster")).await.unwrap();
        let update = ProjectUpdate {
            title: Some("Hijacked".to_string()),
            ..Default::default()
        };

        assert!(store
            .update_owned(project.id, bob, &update, Utc::now())
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete_owned(project.id, bob).await.unwrap());

        let stored = store.find_owned(project.id, alice).await.unwrap().unwrap();
        assert_eq!(stored.title, "Poster");

        assert!(store.delete_owned(project.id, alice).await.unwrap());
        assert!(store.find_owned(project.id, alice).await.unwrap().is_none());
    }
}
