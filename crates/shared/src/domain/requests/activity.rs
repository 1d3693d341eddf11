use crate::model::EntityType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    pub admin_id: i32,
    pub action: String,
    pub entity_type: EntityType,
    pub entity_id: i32,
    pub details: serde_json::Value,
}
