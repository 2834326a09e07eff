/**
 * Project Access Guard
 *
 * Decides whether an authenticated user may touch a project. Every project
 * read, update, delete and export goes through [`ProjectGuard::authorize`]
 * before acting.
 *
 * # Information Hiding
 *
 * A project that does not exist, a project owned by someone else, and an ID
 * that is not even a UUID all produce the same `AccessDenied`, so callers
 * cannot probe for other users' project IDs.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::{AuthError, User};
use crate::backend::projects::store::ProjectStore;
use crate::shared::Project;

/// Ownership check for projects
#[derive(Clone)]
pub struct ProjectGuard {
    projects: Arc<dyn ProjectStore>,
}

impl ProjectGuard {
    pub fn new(projects: Arc<dyn ProjectStore>) -> Self {
        Self { projects }
    }

    /// Allow `user` access to `project_id`, returning the project
    ///
    /// # Errors
    /// * `AccessDenied` - no project with that ID owned by `user`
    /// * `Store` - the project store failed
    pub async fn authorize(&self, user: &User, project_id: Uuid) -> Result<Project, AuthError> {
        let project = self
            .projects
            .find_owned(project_id, user.id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Denied project {} to user {}", project_id, user.username);
                AuthError::AccessDenied
            })?;

        if !authorize_owner(user, project.user_id) {
            return Err(AuthError::AccessDenied);
        }

        Ok(project)
    }

    /// Same as [`ProjectGuard::authorize`] for an unparsed path segment
    ///
    /// A malformed ID is denied like any other unknown project.
    pub async fn authorize_raw(&self, user: &User, raw_id: &str) -> Result<Project, AuthError> {
        let project_id = Uuid::parse_str(raw_id).map_err(|_| {
            tracing::debug!("Denied malformed project id {:?}", raw_id);
            AuthError::AccessDenied
        })?;
        self.authorize(user, project_id).await
    }
}

/// True when `user` is the recorded owner
pub fn authorize_owner(user: &User, resource_owner_id: Uuid) -> bool {
    user.id == resource_owner_id
}
