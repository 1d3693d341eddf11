use crate::{
    domain::{
        requests::{CreateBookRequest, ImageUpload},
        responses::{AdminResponse, ApiResponse, BookResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Book as BookModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBookCommandRepository = Arc<dyn BookCommandRepositoryTrait + Send + Sync>;
pub type DynBookCommandService = Arc<dyn BookCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait BookCommandRepositoryTrait {
    async fn create_book(
        &self,
        req: &CreateBookRequest,
        image: Option<&str>,
    ) -> Result<BookModel, RepositoryError>;
    async fn delete_book(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait BookCommandServiceTrait {
    async fn create_book(
        &self,
        admin: &AdminResponse,
        req: &CreateBookRequest,
        image: Option<ImageUpload>,
    ) -> Result<ApiResponse<BookResponse>, ServiceError>;
    async fn delete_book(
        &self,
        admin: &AdminResponse,
        id: i32,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
