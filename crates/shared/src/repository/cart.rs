use crate::{
    abstract_trait::CartRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Cart as CartModel, CartItem as CartItemModel},
};
use async_trait::async_trait;
use tracing::error;

pub struct CartRepository {
    db: ConnectionPool,
}

impl CartRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn find_cart(&self, user_id: i32) -> Result<Option<CartModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let cart = sqlx::query_as::<_, CartModel>(
            "SELECT cart_id, user_id, created_at, updated_at FROM carts WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(cart)
    }

    async fn get_or_create_cart(&self, user_id: i32) -> Result<CartModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let cart = sqlx::query_as::<_, CartModel>(
            r#"
            INSERT INTO carts (user_id, created_at, updated_at)
            VALUES ($1, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            ON CONFLICT (user_id) DO UPDATE SET updated_at = CURRENT_TIMESTAMP
            RETURNING cart_id, user_id, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to open cart for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(cart)
    }

    async fn find_items(&self, cart_id: i32) -> Result<Vec<CartItemModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, CartItemModel>(
            r#"
            SELECT
                b.book_id,
                b.title,
                b.author,
                b.price,
                b.rating,
                b.category,
                b.description,
                b.image,
                b.created_at,
                b.updated_at,
                ci.quantity
            FROM cart_items ci
            JOIN books b ON b.book_id = ci.book_id
            WHERE ci.cart_id = $1
            ORDER BY ci.added_at ASC, b.book_id ASC
            "#,
        )
        .bind(cart_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }

    async fn upsert_item(
        &self,
        cart_id: i32,
        book_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query(
            r#"
            INSERT INTO cart_items (cart_id, book_id, quantity, added_at)
            VALUES ($1, $2, $3, CURRENT_TIMESTAMP)
            ON CONFLICT (cart_id, book_id) DO UPDATE SET quantity = EXCLUDED.quantity
            "#,
        )
        .bind(cart_id)
        .bind(book_id)
        .bind(quantity)
        .execute(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn update_item(
        &self,
        cart_id: i32,
        book_id: i32,
        quantity: i32,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            "UPDATE cart_items SET quantity = $3 WHERE cart_id = $1 AND book_id = $2",
        )
        .bind(cart_id)
        .bind(book_id)
        .bind(quantity)
        .execute(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_item(&self, cart_id: i32, book_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM cart_items WHERE cart_id = $1 AND book_id = $2")
            .bind(cart_id)
            .bind(book_id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn clear(&self, cart_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
            .bind(cart_id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }
}
