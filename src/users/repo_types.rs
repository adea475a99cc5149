use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the store.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // store-assigned
    pub name: String,
    #[serde(skip_serializing)]
    pub created_at: OffsetDateTime, // listing order only, not exposed in JSON
}
