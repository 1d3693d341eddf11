use crate::{
    domain::{
        requests::{ConfirmPaymentQuery, CreateOrderRecord, CreateOrderRequest, UpdateOrderRequest},
        responses::{AdminResponse, ApiResponse, CreateOrderResponse, OrderResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::OrderWithItems,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Writes the order and its line items atomically.
    async fn create_order(&self, req: &CreateOrderRecord)
    -> Result<OrderWithItems, RepositoryError>;
    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<OrderWithItems, RepositoryError>;
    async fn mark_paid(&self, id: i32) -> Result<OrderWithItems, RepositoryError>;
    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        user: &UserResponse,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<CreateOrderResponse>, ServiceError>;
    async fn confirm_payment(
        &self,
        user_id: i32,
        req: &ConfirmPaymentQuery,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order(
        &self,
        admin: &AdminResponse,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn delete_order(
        &self,
        admin: &AdminResponse,
        id: i32,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
