use super::{ORDER_COLUMNS, attach_items};
use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderRecord, UpdateOrderRequest},
    errors::RepositoryError,
    model::{Order as OrderModel, OrderItem as OrderItemModel, OrderWithItems},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn reload(&self, order: OrderModel) -> Result<OrderWithItems, RepositoryError> {
        attach_items(&self.db, vec![order])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        req: &CreateOrderRecord,
    ) -> Result<OrderWithItems, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin order transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        let sql = format!(
            r#"
            INSERT INTO orders AS o (
                order_code, user_id, full_name, email, phone_number, street, city, state,
                zip_code, shipping_charge, total_amount, tax_amount, payment_method,
                payment_reference, notes, delivery_date, placed_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                CURRENT_TIMESTAMP, CURRENT_TIMESTAMP
            )
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let order = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(&req.order_code)
            .bind(req.user_id)
            .bind(&req.full_name)
            .bind(&req.email)
            .bind(&req.phone_number)
            .bind(&req.street)
            .bind(&req.city)
            .bind(&req.state)
            .bind(&req.zip_code)
            .bind(req.shipping_charge)
            .bind(req.total_amount)
            .bind(req.tax_amount)
            .bind(req.payment_method)
            .bind(&req.payment_reference)
            .bind(&req.notes)
            .bind(req.delivery_date)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert order {}: {e:?}", req.order_code);
                RepositoryError::from(e)
            })?;

        let mut items = Vec::with_capacity(req.items.len());

        for item in &req.items {
            let row = sqlx::query_as::<_, OrderItemModel>(
                r#"
                INSERT INTO order_items (order_id, book_id, title, author, image, price, quantity)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING order_item_id, order_id, book_id, title, author, image, price, quantity
                "#,
            )
            .bind(order.order_id)
            .bind(item.book_id)
            .bind(&item.title)
            .bind(&item.author)
            .bind(&item.image)
            .bind(item.price)
            .bind(item.quantity)
            .fetch_one(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            items.push(row);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Order {} stored with {} item(s)",
            order.order_code,
            items.len()
        );

        Ok(OrderWithItems { order, items })
    }

    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<OrderWithItems, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            UPDATE orders AS o
            SET order_status = COALESCE($2, o.order_status),
                payment_status = COALESCE($3, o.payment_status),
                delivery_date = COALESCE($4, o.delivery_date),
                notes = COALESCE($5, o.notes),
                updated_at = CURRENT_TIMESTAMP
            WHERE o.order_id = $1
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let order = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(id)
            .bind(req.order_status)
            .bind(req.payment_status)
            .bind(req.delivery_date)
            .bind(&req.notes)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?
            .ok_or(RepositoryError::NotFound)?;

        drop(conn);

        self.reload(order).await
    }

    async fn mark_paid(&self, id: i32) -> Result<OrderWithItems, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            UPDATE orders AS o
            SET payment_status = 'paid', updated_at = CURRENT_TIMESTAMP
            WHERE o.order_id = $1
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let order = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?
            .ok_or(RepositoryError::NotFound)?;

        drop(conn);

        self.reload(order).await
    }

    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM orders WHERE order_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
