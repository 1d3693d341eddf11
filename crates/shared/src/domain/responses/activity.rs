use crate::model::{Activity, EntityType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub id: i32,
    pub admin_id: i32,
    pub entity_type: EntityType,
    pub entity_id: i32,
    pub action: String,
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
    pub created_at: String,
}

impl From<Activity> for ActivityResponse {
    fn from(value: Activity) -> Self {
        ActivityResponse {
            id: value.activity_id,
            admin_id: value.admin_id,
            entity_type: value.entity_type,
            entity_id: value.entity_id,
            action: value.action,
            details: value.details,
            created_at: value.created_at.to_string(),
        }
    }
}
