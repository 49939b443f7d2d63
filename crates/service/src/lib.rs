//! Service layer providing contact operations on top of `models`.
//! - Separates business rules (not-found policy, list windows) from data access.
//! - Repository trait keeps handlers independent of the storage backend.

pub mod errors;
pub mod pagination;
pub mod contact;
#[cfg(test)]
pub mod test_support;
