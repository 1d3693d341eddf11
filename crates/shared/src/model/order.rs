use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_method", rename_all = "snake_case")]
pub enum PaymentMethod {
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    #[serde(rename = "Online Payment")]
    OnlinePayment,
}

impl PaymentMethod {
    /// Anything other than an exact cash-on-delivery label is treated as online payment.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("Cash on Delivery") => PaymentMethod::CashOnDelivery,
            _ => PaymentMethod::OnlinePayment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_status", rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
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
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub notes: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub payment_reference: Option<String>,
    pub placed_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Order {
    pub fn grand_total(&self) -> i64 {
        self.total_amount + self.tax_amount + self.shipping_charge
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: i32,
    pub order_id: i32,
    pub book_id: Option<i32>,
    pub title: String,
    pub author: String,
    pub image: Option<String>,
    pub price: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_payment_methods_fall_back_to_online() {
        assert_eq!(
            PaymentMethod::normalize(Some("Cash on Delivery")),
            PaymentMethod::CashOnDelivery
        );
        assert_eq!(
            PaymentMethod::normalize(Some("Online Payment")),
            PaymentMethod::OnlinePayment
        );
        assert_eq!(
            PaymentMethod::normalize(Some("bitcoin")),
            PaymentMethod::OnlinePayment
        );
        assert_eq!(PaymentMethod::normalize(None), PaymentMethod::OnlinePayment);
    }

    #[test]
    fn statuses_use_display_labels_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipped).unwrap(),
            "\"Shipped\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(),
            "\"Cash on Delivery\""
        );
        let status: PaymentStatus = serde_json::from_str("\"Paid\"").unwrap();
        assert_eq!(status, PaymentStatus::Paid);
    }
}
