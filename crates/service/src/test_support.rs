#![cfg(test)]
use configs::DatabaseConfig;
use models::db::Storage;

/// Fresh, migrated in-memory database per test.
pub async fn open_storage() -> Result<Storage, anyhow::Error> {
    let storage = Storage::new(DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    });
    storage.open().await?;
    Ok(storage)
}
