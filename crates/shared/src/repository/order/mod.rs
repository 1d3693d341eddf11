mod command;
mod query;

use std::{collections::HashMap, sync::Arc};

use self::command::OrderCommandRepository;
use self::query::OrderQueryRepository;

use crate::{
    abstract_trait::{DynOrderCommandRepository, DynOrderQueryRepository},
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderItem as OrderItemModel, OrderWithItems},
};

#[derive(Clone)]
pub struct OrderRepository {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;

        let command =
            Arc::new(OrderCommandRepository::new(pool.clone())) as DynOrderCommandRepository;

        Self { query, command }
    }
}

const ORDER_COLUMNS: &str = r#"
    o.order_id, o.order_code, o.user_id, o.full_name, o.email, o.phone_number,
    o.street, o.city, o.state, o.zip_code, o.shipping_charge, o.total_amount,
    o.tax_amount, o.payment_method, o.payment_status, o.order_status, o.notes,
    o.delivery_date, o.payment_reference, o.placed_at, o.updated_at
"#;

/// Loads the line items of `orders` in one query and pairs them up, keeping order.
async fn attach_items(
    db: &ConnectionPool,
    orders: Vec<OrderModel>,
) -> Result<Vec<OrderWithItems>, RepositoryError> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = orders.iter().map(|o| o.order_id).collect();

    let mut conn = db.acquire().await.map_err(RepositoryError::from)?;

    let items = sqlx::query_as::<_, OrderItemModel>(
        r#"
        SELECT order_item_id, order_id, book_id, title, author, image, price, quantity
        FROM order_items
        WHERE order_id = ANY($1)
        ORDER BY order_item_id ASC
        "#,
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(RepositoryError::from)?;

    let mut grouped: HashMap<i32, Vec<OrderItemModel>> = HashMap::new();
    for item in items {
        grouped.entry(item.order_id).or_default().push(item);
    }

    Ok(orders
        .into_iter()
        .map(|order| {
            let items = grouped.remove(&order.order_id).unwrap_or_default();
            OrderWithItems { order, items }
        })
        .collect())
}
