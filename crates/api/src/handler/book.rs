use crate::middleware::{
    jwt::{AuthAdmin, admin_auth},
    validate::SimpleValidatedQuery,
};
use axum::{
    Json,
    extract::{Extension, Multipart, Path, multipart::Field},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use shared::{
    abstract_trait::{DynBookCommandService, DynBookQueryService},
    domain::{
        requests::{CreateBookRequest, FindAllBooks, ImageUpload},
        responses::{ApiResponse, ApiResponsePagination, BookResponse},
    },
    errors::{ErrorResponse, HttpError},
    state::AppState,
};
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;

/// Multipart form accepted by `POST /api/book`.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct BookUploadForm {
    title: String,
    author: String,
    price: i64,
    rating: Option<i32>,
    category: String,
    description: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    image: Option<Vec<u8>>,
}

async fn text_field(field: Field<'_>) -> Result<String, HttpError> {
    field
        .text()
        .await
        .map(|value| value.trim().to_string())
        .map_err(|e| HttpError::BadRequest(format!("Invalid form field: {e}")))
}

/// Splits a book upload into its fields and the optional cover image.
async fn parse_book_form(
    mut multipart: Multipart,
) -> Result<(CreateBookRequest, Option<ImageUpload>), HttpError> {
    let mut req = CreateBookRequest {
        title: String::new(),
        author: String::new(),
        price: 0,
        rating: 0,
        category: String::new(),
        description: String::new(),
    };
    let mut price_seen = false;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "title" => req.title = text_field(field).await?,
            "author" => req.author = text_field(field).await?,
            "category" => req.category = text_field(field).await?,
            "description" => req.description = text_field(field).await?,
            "price" => {
                req.price = text_field(field)
                    .await?
                    .parse()
                    .map_err(|_| HttpError::BadRequest("Price must be a number".into()))?;
                price_seen = true;
            }
            "rating" => {
                let raw = text_field(field).await?;
                if !raw.is_empty() {
                    req.rating = raw
                        .parse()
                        .map_err(|_| HttpError::BadRequest("Rating must be a number".into()))?;
                }
            }
            "image" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| HttpError::BadRequest(format!("Invalid image upload: {e}")))?;

                if !bytes.is_empty() {
                    image = Some(ImageUpload {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            other => warn!("⚠️ Ignoring unexpected form field '{other}'"),
        }
    }

    if !price_seen {
        return Err(HttpError::BadRequest("Price is required".into()));
    }

    Ok((req, image))
}

#[utoipa::path(
    post,
    path = "/api/book",
    tag = "Book",
    security(("bearer_auth" = [])),
    request_body(content = BookUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Book created", body = ApiResponse<BookResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn create_book(
    Extension(service): Extension<DynBookCommandService>,
    Extension(AuthAdmin(admin)): Extension<AuthAdmin>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let (body, image) = parse_book_form(multipart).await?;

    let response = service.create_book(&admin, &body, image).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/book",
    tag = "Book",
    params(FindAllBooks),
    responses(
        (status = 200, description = "Books, newest first", body = ApiResponsePagination<Vec<BookResponse>>),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
pub async fn get_books(
    Extension(service): Extension<DynBookQueryService>,
    SimpleValidatedQuery(params): SimpleValidatedQuery<FindAllBooks>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/book/{id}",
    tag = "Book",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = ApiResponse<BookResponse>),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    Extension(service): Extension<DynBookQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/book/{id}",
    tag = "Book",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    Extension(service): Extension<DynBookCommandService>,
    Extension(AuthAdmin(admin)): Extension<AuthAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_book(&admin, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn book_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let books = &app_state.di_container.book_service;

    let public_routes = OpenApiRouter::new()
        .route("/api/book", get(get_books))
        .route("/api/book/{id}", get(get_book))
        .layer(Extension(books.query.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/book", post(create_book))
        .route("/api/book/{id}", delete(delete_book))
        .route_layer(middleware::from_fn(admin_auth))
        .layer(Extension(books.command.clone()))
        .layer(Extension(app_state.di_container.admin_service.clone()));

    public_routes.merge(admin_routes)
}
