use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "activity_entity", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Book,
    Order,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub activity_id: i32,
    pub admin_id: i32,
    pub entity_type: EntityType,
    pub entity_id: i32,
    pub action: String,
    pub details: serde_json::Value,
    pub created_at: NaiveDateTime,
}
