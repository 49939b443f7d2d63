use serde::Deserialize;

/// Fields accepted when creating a contact. `id` and `updated_at` are
/// assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub status: i16,
}
