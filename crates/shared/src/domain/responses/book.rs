use crate::model::Book;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub price: i64,
    pub rating: i32,
    pub category: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Book> for BookResponse {
    fn from(value: Book) -> Self {
        BookResponse {
            id: value.book_id,
            title: value.title,
            author: value.author,
            price: value.price,
            rating: value.rating,
            category: value.category,
            description: value.description,
            image: value.image,
            created_at: value.created_at.to_string(),
            updated_at: value.updated_at.to_string(),
        }
    }
}
