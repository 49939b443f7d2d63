//! Storage connection lifecycle.
//!
//! [`Storage`] is the single process-wide handle to the relational database.
//! It starts `closed`; [`Storage::open`] moves it to `open` and
//! [`Storage::close`] back to `closed`. Both transitions are no-ops when the
//! handle is already in the target state.

use std::{sync::Arc, time::Duration};

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::ModelError;

/// Open a pooled connection using the configured limits and timeouts.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    Database::connect(opt).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Cloneable handle shared by every request; clones observe the same state.
#[derive(Clone)]
pub struct Storage {
    cfg: Arc<DatabaseConfig>,
    conn: Arc<RwLock<Option<DatabaseConnection>>>,
}

impl Storage {
    /// Create a closed handle. No connection is made until [`Storage::open`].
    pub fn new(cfg: DatabaseConfig) -> Self {
        Self { cfg: Arc::new(cfg), conn: Arc::new(RwLock::new(None)) }
    }

    /// `closed -> open`. Returns `false` when the handle was already open.
    pub async fn open(&self) -> Result<bool, ModelError> {
        let mut guard = self.conn.write().await;
        if guard.is_some() {
            debug!("storage already open");
            return Ok(false);
        }
        let db = connect_with_config(&self.cfg).await?;
        if self.cfg.auto_migrate {
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| ModelError::Db(e.to_string()))?;
            info!("migrations applied");
        }
        *guard = Some(db);
        Ok(true)
    }

    /// `open -> closed`. Returns `false` when the handle was already closed.
    pub async fn close(&self) -> Result<bool, ModelError> {
        let taken = self.conn.write().await.take();
        match taken {
            Some(db) => {
                db.close().await.map_err(|e| ModelError::Db(e.to_string()))?;
                Ok(true)
            }
            None => {
                debug!("storage already closed");
                Ok(false)
            }
        }
    }

    pub async fn is_open(&self) -> bool {
        self.conn.read().await.is_some()
    }

    /// Borrow the live connection for one statement.
    pub async fn connection(&self) -> Result<DatabaseConnection, ModelError> {
        self.conn.read().await.clone().ok_or(ModelError::Closed)
    }
}
