use std::sync::Arc;
use tracing::{info, instrument};

use models::contact;

use crate::contact::{domain::NewContact, repository::ContactRepository};
use crate::errors::ServiceError;
use crate::pagination::ListWindow;

/// Application service for contacts.
/// Turns absent rows into [`ServiceError::NotFound`] so handlers only map errors.
pub struct ContactService<R: ContactRepository> {
    repo: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self, window: ListWindow) -> Result<Vec<contact::Model>, ServiceError> {
        let (skip, limit) = window.normalize();
        self.repo.list(skip, limit).await
    }

    /// Ids outside the `i32` key range cannot exist and are reported as not found.
    pub async fn get(&self, id: i64) -> Result<contact::Model, ServiceError> {
        let id = i32::try_from(id).map_err(|_| ServiceError::not_found("contact"))?;
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("contact"))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewContact) -> Result<contact::Model, ServiceError> {
        let created = self.repo.create(&input).await?;
        info!(id = created.id, "contact_created");
        Ok(created)
    }

    /// Succeeds only when a row was actually removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let id = i32::try_from(id).map_err(|_| ServiceError::not_found("contact"))?;
        match self.repo.delete(id).await? {
            0 => Err(ServiceError::not_found("contact")),
            _ => {
                info!(id, "contact_deleted");
                Ok(())
            }
        }
    }
}
