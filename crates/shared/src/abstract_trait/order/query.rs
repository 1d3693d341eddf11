use crate::{
    domain::{
        requests::FindAllOrders,
        responses::{ApiResponse, OrderListResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::OrderWithItems,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<OrderWithItems>, RepositoryError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderWithItems>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderWithItems>, RepositoryError>;
    async fn find_by_reference(
        &self,
        user_id: i32,
        reference: &str,
    ) -> Result<Option<OrderWithItems>, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponse<OrderListResponse>, ServiceError>;
    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
