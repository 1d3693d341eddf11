use crate::{
    domain::{
        requests::CartItemRequest,
        responses::{ApiResponse, CartResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Cart as CartModel, CartItem as CartItemModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;
pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartRepositoryTrait {
    async fn find_cart(&self, user_id: i32) -> Result<Option<CartModel>, RepositoryError>;
    async fn get_or_create_cart(&self, user_id: i32) -> Result<CartModel, RepositoryError>;
    async fn find_items(&self, cart_id: i32) -> Result<Vec<CartItemModel>, RepositoryError>;
    /// Inserts the line or overwrites the quantity of an existing one.
    async fn upsert_item(
        &self,
        cart_id: i32,
        book_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError>;
    /// Returns `false` when the book is not in the cart.
    async fn update_item(
        &self,
        cart_id: i32,
        book_id: i32,
        quantity: i32,
    ) -> Result<bool, RepositoryError>;
    async fn remove_item(&self, cart_id: i32, book_id: i32) -> Result<(), RepositoryError>;
    async fn clear(&self, cart_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CartServiceTrait {
    async fn add_item(
        &self,
        user_id: i32,
        req: &CartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn update_item(
        &self,
        user_id: i32,
        req: &CartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn remove_item(
        &self,
        user_id: i32,
        book_id: i32,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn clear_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError>;
}
