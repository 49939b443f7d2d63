use std::sync::Arc;

use models::db::Storage;
use service::contact::{ContactService, SeaOrmContactRepository};

/// Shared router state. The storage handle is owned by the entrypoint and
/// injected here; handlers never reach for a global connection.
#[derive(Clone)]
pub struct ServerState {
    pub contacts: Arc<ContactService<SeaOrmContactRepository>>,
}

impl ServerState {
    pub fn new(storage: Storage) -> Self {
        let repo = SeaOrmContactRepository { storage };
        Self { contacts: Arc::new(ContactService::new(Arc::new(repo))) }
    }
}
