//! List window utilities for service layer
//!
//! Callers may omit either bound; missing values fall back to the accessor
//! defaults and `limit` is clamped so a single call never returns more than
//! [`MAX_LIMIT`] rows.

use models::contact::{DEFAULT_LIMIT, DEFAULT_SKIP};

pub const MAX_LIMIT: u64 = 100;

/// Offset/limit window over an ordered listing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListWindow {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl ListWindow {
    /// Apply defaults and clamp `limit` to `1..=MAX_LIMIT`
    pub fn normalize(self) -> (u64, u64) {
        let skip = self.skip.unwrap_or(DEFAULT_SKIP);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        (skip, limit)
    }
}
