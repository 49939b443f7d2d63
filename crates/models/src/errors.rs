use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("storage connection is closed")]
    Closed,
    #[error("database error: {0}")]
    Db(String),
}
