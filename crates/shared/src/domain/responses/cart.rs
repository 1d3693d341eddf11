use crate::domain::{
    pricing::{self, PriceSummary},
    responses::BookResponse,
};
use crate::errors::ServiceError;
use crate::model::CartItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub book: BookResponse,
    pub quantity: i32,
    pub line_total: i64,
}

impl TryFrom<CartItem> for CartItemResponse {
    type Error = ServiceError;

    fn try_from(value: CartItem) -> Result<Self, Self::Error> {
        let line_total = pricing::line_total(value.book.price, value.quantity)?;

        Ok(CartItemResponse {
            book: BookResponse::from(value.book),
            quantity: value.quantity,
            line_total,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub total_amount: i64,
    pub tax: i64,
    pub shipping: i64,
    pub final_amount: i64,
}

impl From<PriceSummary> for CartSummary {
    fn from(value: PriceSummary) -> Self {
        CartSummary {
            total_amount: value.subtotal,
            tax: value.tax,
            shipping: value.shipping,
            final_amount: value.total,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub summary: CartSummary,
}
