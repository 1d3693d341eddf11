use crate::model::Book;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cart {
    pub cart_id: i32,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A cart line joined with the book it refers to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    #[sqlx(flatten)]
    pub book: Book,
    pub quantity: i32,
}
