use crate::{
    abstract_trait::BookCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateBookRequest, errors::RepositoryError, model::Book as BookModel,
};
use async_trait::async_trait;

pub struct BookCommandRepository {
    db: ConnectionPool,
}

impl BookCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookCommandRepositoryTrait for BookCommandRepository {
    async fn create_book(
        &self,
        req: &CreateBookRequest,
        image: Option<&str>,
    ) -> Result<BookModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let book = sqlx::query_as::<_, BookModel>(
            r#"
            INSERT INTO books (
                title, author, price, rating, category, description, image,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING book_id, title, author, price, rating, category, description, image,
                      created_at, updated_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.author)
        .bind(req.price)
        .bind(req.rating)
        .bind(&req.category)
        .bind(&req.description)
        .bind(image)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(book)
    }

    async fn delete_book(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
