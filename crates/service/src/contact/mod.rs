pub mod domain;
pub mod repository;
pub mod service;

pub use domain::NewContact;
pub use repository::{ContactRepository, SeaOrmContactRepository};
pub use service::ContactService;
