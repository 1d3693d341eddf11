use crate::{
    abstract_trait::BookQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllBooks, errors::RepositoryError, model::Book as BookModel,
};
use async_trait::async_trait;
use sqlx::FromRow;
use tracing::{error, info};

#[derive(FromRow)]
struct BookRow {
    #[sqlx(flatten)]
    book: BookModel,
    total_count: Option<i64>,
}

pub struct BookQueryRepository {
    db: ConnectionPool,
}

impl BookQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookQueryRepositoryTrait for BookQueryRepository {
    async fn find_all(&self, req: &FindAllBooks) -> Result<(Vec<BookModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching books search={:?} category={:?}",
            req.search, req.category
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = i64::from(req.page_size);
        let offset = req.offset();

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.trim())
        };

        let category = req
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                b.book_id,
                b.title,
                b.author,
                b.price,
                b.rating,
                b.category,
                b.description,
                b.image,
                b.created_at,
                b.updated_at,
                COUNT(*) OVER() AS total_count
            FROM books b
            WHERE ($1::TEXT IS NULL
                   OR b.title ILIKE '%' || $1 || '%'
                   OR b.author ILIKE '%' || $1 || '%')
              AND ($2::TEXT IS NULL OR b.category = $2)
            ORDER BY b.created_at DESC, b.book_id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(search_pattern)
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch books: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows
            .first()
            .map(|r| r.total_count.unwrap_or(0))
            .unwrap_or(0);

        let books = rows.into_iter().map(|r| r.book).collect();

        Ok((books, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<BookModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let book = sqlx::query_as::<_, BookModel>(
            r#"
            SELECT book_id, title, author, price, rating, category, description, image,
                   created_at, updated_at
            FROM books
            WHERE book_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch book {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(book)
    }
}
