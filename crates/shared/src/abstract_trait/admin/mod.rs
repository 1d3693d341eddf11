use crate::{
    domain::{
        requests::{CreateAdminRecord, LoginRequest, RegisterAdminRequest},
        responses::{AdminAuthResponse, AdminResponse, ApiResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Admin as AdminModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAdminRepository = Arc<dyn AdminRepositoryTrait + Send + Sync>;
pub type DynAdminService = Arc<dyn AdminServiceTrait + Send + Sync>;

#[async_trait]
pub trait AdminRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<AdminModel>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminModel>, RepositoryError>;
    async fn create_admin(&self, req: &CreateAdminRecord) -> Result<AdminModel, RepositoryError>;
}

#[async_trait]
pub trait AdminServiceTrait {
    async fn register_admin(
        &self,
        req: &RegisterAdminRequest,
    ) -> Result<ApiResponse<AdminAuthResponse>, ServiceError>;
    async fn login_admin(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<AdminAuthResponse>, ServiceError>;
    async fn authenticate(&self, token: &str) -> Result<AdminResponse, ServiceError>;
}
