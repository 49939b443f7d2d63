use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub status: i16,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Default window for [`list`].
pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 100;

/// Insert a row; `id` comes from the database and `updated_at` is stamped now.
/// Column widths are enforced by the database, not here.
pub async fn create(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
    status: i16,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        email: Set(email.to_string()),
        phone: Set(phone.to_string()),
        status: Set(status),
        updated_at: Set(Utc::now().into()),
    };
    let created = am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    debug!(id = created.id, "contact inserted");
    Ok(created)
}

/// Point lookup by primary key.
pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Range read ordered by ascending `id`, i.e. insertion order.
pub async fn list(db: &DatabaseConnection, skip: u64, limit: u64) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Point delete. Returns the number of rows removed, 0 when `id` is absent.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    debug!(id, rows = res.rows_affected, "contact delete executed");
    Ok(res.rows_affected)
}
