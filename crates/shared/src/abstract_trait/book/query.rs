use crate::{
    domain::{
        requests::FindAllBooks,
        responses::{ApiResponse, ApiResponsePagination, BookResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Book as BookModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBookQueryRepository = Arc<dyn BookQueryRepositoryTrait + Send + Sync>;
pub type DynBookQueryService = Arc<dyn BookQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait BookQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllBooks) -> Result<(Vec<BookModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<BookModel>, RepositoryError>;
}

#[async_trait]
pub trait BookQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllBooks,
    ) -> Result<ApiResponsePagination<Vec<BookResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<BookResponse>, ServiceError>;
}
