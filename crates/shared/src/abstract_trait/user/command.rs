use crate::{
    domain::requests::CreateUserRecord, errors::RepositoryError, model::User as UserModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, req: &CreateUserRecord) -> Result<UserModel, RepositoryError>;
}
