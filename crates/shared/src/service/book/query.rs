use crate::{
    abstract_trait::{BookQueryServiceTrait, DynBookQueryRepository},
    domain::{
        requests::FindAllBooks,
        responses::{ApiResponse, ApiResponsePagination, BookResponse, Pagination},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct BookQueryService {
    query: DynBookQueryRepository,
}

impl BookQueryService {
    pub fn new(query: DynBookQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl BookQueryServiceTrait for BookQueryService {
    async fn find_all(
        &self,
        req: &FindAllBooks,
    ) -> Result<ApiResponsePagination<Vec<BookResponse>>, ServiceError> {
        req.validate()?;

        let (books, total) = self.query.find_all(req).await.map_err(|e| {
            error!("❌ Failed to fetch books: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Found {} book(s) out of {total}", books.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Books retrieved successfully".to_string(),
            data: books.into_iter().map(BookResponse::from).collect(),
            pagination: Pagination::new(req.page, req.page_size, total),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<BookResponse>, ServiceError> {
        let book = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Book not found".to_string()))?;

        Ok(ApiResponse::success(
            "Book retrieved successfully",
            BookResponse::from(book),
        ))
    }
}
