use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FindAllBooks {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: i32,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub category: Option<String>,
}

impl Default for FindAllBooks {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            search: String::new(),
            category: None,
        }
    }
}

impl FindAllBooks {
    /// Row offset of the requested page, computed in `i64` so large pages
    /// cannot overflow.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).max(0) * i64::from(self.page_size.max(0))
    }
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "The Pragmatic Programmer")]
    pub title: String,

    #[validate(length(min = 1, message = "Author is required"))]
    #[schema(example = "Andrew Hunt")]
    pub author: String,

    #[validate(range(
        min = 0,
        max = 100_000_000_000_i64,
        message = "Price must be between 0 and 100000000000"
    ))]
    #[schema(example = 450000)]
    pub price: i64,

    #[validate(range(min = 0, max = 5, message = "Rating must be between 0 and 5"))]
    #[schema(example = 4)]
    pub rating: i32,

    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "Non-Fiction")]
    pub category: String,

    #[serde(default)]
    pub description: String,
}

/// A book cover received through a multipart upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// File extension for the declared content type. Only raster formats are
    /// accepted, since covers are served back from the API origin.
    pub fn extension(&self) -> Option<&'static str> {
        match self.content_type.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some("png"),
            "image/jpeg" | "image/jpg" => Some("jpg"),
            "image/webp" => Some("webp"),
            "image/gif" => Some("gif"),
            _ => None,
        }
    }
}
