use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    #[validate(range(min = 1, message = "Book id and valid quantity are required"))]
    #[schema(example = 1)]
    pub book_id: i32,

    #[validate(range(
        min = 1,
        max = 1000,
        message = "Book id and valid quantity are required"
    ))]
    #[schema(example = 2)]
    pub quantity: i32,
}
