use serde::Serialize;

/// Static greeting returned by `GET /`.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct Message {
    pub message: &'static str,
}

/// Structured error body used by every JSON error response.
#[derive(Serialize, Debug, Clone)]
pub struct Detail {
    pub detail: String,
}

impl Detail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}
