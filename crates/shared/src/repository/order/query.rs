use super::{ORDER_COLUMNS, attach_items};
use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllOrders,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderWithItems},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<OrderWithItems>, RepositoryError> {
        info!(
            "🔍 Fetching all orders with search: {:?} status: {:?}",
            req.search, req.status
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.trim())
        };

        let sql = format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders o
            WHERE ($1::TEXT IS NULL
                   OR o.order_code ILIKE '%' || $1 || '%'
                   OR o.full_name ILIKE '%' || $1 || '%'
                   OR o.email ILIKE '%' || $1 || '%'
                   OR EXISTS (
                       SELECT 1 FROM order_items oi
                       WHERE oi.order_id = o.order_id
                         AND oi.title ILIKE '%' || $1 || '%'
                   ))
              AND ($2::order_status IS NULL OR o.order_status = $2)
            ORDER BY o.placed_at DESC, o.order_id DESC
            "#
        );

        let orders = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(search_pattern)
            .bind(req.status)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders: {:?}", e);
                RepositoryError::from(e)
            })?;

        drop(conn);

        attach_items(&self.db, orders).await
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderWithItems>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders o
            WHERE o.user_id = $1
            ORDER BY o.placed_at DESC, o.order_id DESC
            "#
        );

        let orders = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(user_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        drop(conn);

        attach_items(&self.db, orders).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderWithItems>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders o WHERE o.order_id = $1");

        let order = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        drop(conn);

        match order {
            Some(order) => Ok(attach_items(&self.db, vec![order]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_reference(
        &self,
        user_id: i32,
        reference: &str,
    ) -> Result<Option<OrderWithItems>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "SELECT {ORDER_COLUMNS} FROM orders o WHERE o.payment_reference = $1 AND o.user_id = $2"
        );

        let order = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(reference)
            .bind(user_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        drop(conn);

        match order {
            Some(order) => Ok(attach_items(&self.db, vec![order]).await?.pop()),
            None => Ok(None),
        }
    }
}
