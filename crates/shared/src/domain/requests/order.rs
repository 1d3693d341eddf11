use crate::model::{OrderStatus, PaymentMethod, PaymentStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddressRequest {
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,

    #[validate(length(min = 1, message = "Zip code is required"))]
    pub zip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CustomerRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ada Obi")]
    pub name: String,

    #[validate(email(message = "Invalid email"))]
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    #[schema(example = "+2348000000000")]
    pub phone: String,

    #[validate(nested)]
    pub address: AddressRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItemRequest {
    #[schema(example = 1)]
    pub id: i32,

    #[validate(range(min = 1, max = 1000, message = "Quantity must be between 1 and 1000"))]
    #[schema(example = 1)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(nested)]
    pub customer: CustomerRequest,

    #[serde(default)]
    #[validate(length(min = 1, message = "Invalid or empty items array"), nested)]
    pub items: Vec<OrderItemRequest>,

    #[schema(example = "Online Payment")]
    pub payment_method: Option<String>,

    pub notes: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub delivery_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub order_status: Option<OrderStatus>,

    pub payment_status: Option<PaymentStatus>,

    #[schema(value_type = Option<String>, format = Date)]
    pub delivery_date: Option<NaiveDate>,

    pub notes: Option<String>,
}

impl UpdateOrderRequest {
    pub fn is_empty(&self) -> bool {
        self.order_status.is_none()
            && self.payment_status.is_none()
            && self.delivery_date.is_none()
            && self.notes.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllOrders {
    #[serde(default)]
    pub search: String,

    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConfirmPaymentQuery {
    pub reference: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub book_id: i32,
    pub title: String,
    pub author: String,
    pub image: Option<String>,
    pub price: i64,
    pub quantity: i32,
}

/// Fully priced order ready to be persisted.
#[derive(Debug, Clone)]
pub struct CreateOrderRecord {
    pub order_code: String,
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub shipping_charge: i64,
    pub total_amount: i64,
    pub tax_amount: i64,
    pub payment_method: PaymentMethod,
    pub payment_reference: Option<String>,
    pub notes: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub items: Vec<NewOrderItem>,
}
