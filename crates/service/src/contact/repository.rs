use async_trait::async_trait;
use models::{contact, db::Storage};

use crate::contact::domain::NewContact;
use crate::errors::ServiceError;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, input: &NewContact) -> Result<contact::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<contact::Model>, ServiceError>;
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<contact::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository; every call borrows the shared storage handle.
#[derive(Clone)]
pub struct SeaOrmContactRepository {
    pub storage: Storage,
}

#[async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn create(&self, input: &NewContact) -> Result<contact::Model, ServiceError> {
        let db = self.storage.connection().await?;
        Ok(contact::create(&db, &input.first_name, &input.last_name, &input.email, &input.phone, input.status).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<contact::Model>, ServiceError> {
        let db = self.storage.connection().await?;
        Ok(contact::get(&db, id).await?)
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<contact::Model>, ServiceError> {
        let db = self.storage.connection().await?;
        Ok(contact::list(&db, skip, limit).await?)
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let db = self.storage.connection().await?;
        Ok(contact::delete(&db, id).await?)
    }
}
