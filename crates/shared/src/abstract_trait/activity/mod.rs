use crate::{
    domain::{
        requests::NewActivity,
        responses::{ActivityResponse, ApiResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Activity as ActivityModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynActivityRepository = Arc<dyn ActivityRepositoryTrait + Send + Sync>;
pub type DynActivityService = Arc<dyn ActivityServiceTrait + Send + Sync>;

#[async_trait]
pub trait ActivityRepositoryTrait {
    async fn create(&self, req: &NewActivity) -> Result<ActivityModel, RepositoryError>;
    async fn find_recent(&self, limit: i64) -> Result<Vec<ActivityModel>, RepositoryError>;
}

#[async_trait]
pub trait ActivityServiceTrait {
    /// Records an admin action. Failures are logged and never surface to the caller.
    async fn log(&self, req: NewActivity);
    async fn recent(&self) -> Result<ApiResponse<Vec<ActivityResponse>>, ServiceError>;
}
