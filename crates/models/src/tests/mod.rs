

use configs::DatabaseConfig;

/// Single-connection in-memory SQLite; every pooled connection would
/// otherwise see its own empty database.
pub fn memory_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    }
}
