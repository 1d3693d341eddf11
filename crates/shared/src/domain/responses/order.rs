use crate::model::{
    Order, OrderItem, OrderStatus, OrderWithItems, PaymentMethod, PaymentStatus,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddressResponse {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub book_id: Option<i32>,
    pub title: String,
    pub author: String,
    pub image: Option<String>,
    pub price: i64,
    pub quantity: i32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            book_id: value.book_id,
            title: value.title,
            author: value.author,
            image: value.image,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub order_id: String,
    pub user_id: i32,
    pub shipping_address: ShippingAddressResponse,
    pub items: Vec<OrderItemResponse>,
    pub shipping_charge: i64,
    pub total_amount: i64,
    pub tax_amount: i64,
    pub grand_total: i64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub notes: Option<String>,
    pub delivery_date: Option<String>,
    pub payment_reference: Option<String>,
    pub placed_at: String,
    pub updated_at: String,
}

impl From<OrderWithItems> for OrderResponse {
    fn from(value: OrderWithItems) -> Self {
        let OrderWithItems { order, items } = value;
        let grand_total = order.grand_total();

        let Order {
            order_id,
            order_code,
            user_id,
            full_name,
            email,
            phone_number,
            street,
            city,
            state,
            zip_code,
            shipping_charge,
            total_amount,
            tax_amount,
            payment_method,
            payment_status,
            order_status,
            notes,
            delivery_date,
            payment_reference,
            placed_at,
            updated_at,
        } = order;

        OrderResponse {
            id: order_id,
            order_id: order_code,
            user_id,
            shipping_address: ShippingAddressResponse {
                full_name,
                email,
                phone_number,
                street,
                city,
                state,
                zip_code,
            },
            items: items.into_iter().map(OrderItemResponse::from).collect(),
            shipping_charge,
            total_amount,
            tax_amount,
            grand_total,
            payment_method,
            payment_status,
            order_status,
            notes,
            delivery_date: delivery_date.map(|d| d.to_string()),
            payment_reference,
            placed_at: placed_at.to_string(),
            updated_at: updated_at.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order: OrderResponse,
    pub checkout_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderCounts {
    pub total_orders: i64,
    pub pending: i64,
    pub processing: i64,
    pub shipped: i64,
    pub delivered: i64,
    pub cancelled: i64,
    pub pending_payment: i64,
}

impl OrderCounts {
    pub fn tally<'a, I>(orders: I) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        orders.into_iter().fold(Self::default(), |mut acc, order| {
            acc.total_orders += 1;

            match order.order_status {
                OrderStatus::Pending => acc.pending += 1,
                OrderStatus::Processing => acc.processing += 1,
                OrderStatus::Shipped => acc.shipped += 1,
                OrderStatus::Delivered => acc.delivered += 1,
                OrderStatus::Cancelled => acc.cancelled += 1,
            }

            if order.payment_status == PaymentStatus::Unpaid {
                acc.pending_payment += 1;
            }

            acc
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderListResponse {
    pub counts: OrderCounts,
    pub orders: Vec<OrderResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(id: i32, status: OrderStatus, payment: PaymentStatus) -> Order {
        let at = NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();

        Order {
            order_id: id,
            order_code: format!("ORD-{id}"),
            user_id: 1,
            full_name: "Ada".into(),
            email: "ada@example.com".into(),
            phone_number: "0800".into(),
            street: "1 Marina".into(),
            city: "Lagos".into(),
            state: "LA".into(),
            zip_code: "100001".into(),
            shipping_charge: 100,
            total_amount: 1_000,
            tax_amount: 50,
            payment_method: PaymentMethod::OnlinePayment,
            payment_status: payment,
            order_status: status,
            notes: None,
            delivery_date: None,
            payment_reference: None,
            placed_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn tallies_statuses_and_unpaid_orders() {
        let orders = vec![
            order(1, OrderStatus::Pending, PaymentStatus::Unpaid),
            order(2, OrderStatus::Pending, PaymentStatus::Paid),
            order(3, OrderStatus::Shipped, PaymentStatus::Paid),
            order(4, OrderStatus::Cancelled, PaymentStatus::Unpaid),
        ];

        let counts = OrderCounts::tally(&orders);

        assert_eq!(counts.total_orders, 4);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.shipped, 1);
        assert_eq!(counts.cancelled, 1);
        assert_eq!(counts.processing, 0);
        assert_eq!(counts.pending_payment, 2);
    }

    #[test]
    fn response_exposes_order_code_and_grand_total() {
        let response = OrderResponse::from(OrderWithItems {
            order: order(9, OrderStatus::Pending, PaymentStatus::Unpaid),
            items: vec![],
        });

        assert_eq!(response.id, 9);
        assert_eq!(response.order_id, "ORD-9");
        assert_eq!(response.grand_total, 1_150);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["shippingAddress"]["fullName"], "Ada");
        assert_eq!(json["paymentStatus"], "Unpaid");
    }
}
