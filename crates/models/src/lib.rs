//! Persistence layer: the storage connection handle and the `contacts` entity.

pub mod errors;
pub mod db;
pub mod contact;

#[cfg(test)]
mod tests;
