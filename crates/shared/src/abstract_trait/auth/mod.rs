use crate::{
    domain::{
        requests::{GoogleLoginRequest, LoginRequest, RegisterUserRequest},
        responses::{ApiResponse, UserAuthResponse, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register_user(
        &self,
        req: &RegisterUserRequest,
    ) -> Result<ApiResponse<UserAuthResponse>, ServiceError>;
    async fn login_user(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<UserAuthResponse>, ServiceError>;
    async fn google_login(
        &self,
        req: &GoogleLoginRequest,
    ) -> Result<ApiResponse<UserAuthResponse>, ServiceError>;
    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError>;

    /// Resolves a bearer token to the user it was issued for.
    async fn authenticate(&self, token: &str) -> Result<UserResponse, ServiceError>;
}
