use crate::middleware::{
    jwt::{AuthUser, user_auth},
    validate::SimpleValidatedJson,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::DynCartService,
    domain::{
        requests::CartItemRequest,
        responses::{ApiResponse, CartResponse},
    },
    errors::{ErrorResponse, HttpError},
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/cart/add",
    tag = "Cart",
    security(("bearer_auth" = [])),
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Item added", body = ApiResponse<CartResponse>),
        (status = 400, description = "Invalid quantity", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn add_to_cart(
    Extension(service): Extension<DynCartService>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_item(user.id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    tag = "Cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cart with price summary", body = ApiResponse<CartResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartService>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_cart(user.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/cart/update",
    tag = "Cart",
    security(("bearer_auth" = [])),
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Quantity updated", body = ApiResponse<CartResponse>),
        (status = 400, description = "Invalid quantity", body = ErrorResponse),
        (status = 404, description = "Cart or item not found", body = ErrorResponse)
    )
)]
pub async fn update_cart_item(
    Extension(service): Extension<DynCartService>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_item(user.id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/cart/remove/{book_id}",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(("book_id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Item removed", body = ApiResponse<CartResponse>),
        (status = 404, description = "Cart not found", body = ErrorResponse)
    )
)]
pub async fn remove_cart_item(
    Extension(service): Extension<DynCartService>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.remove_item(user.id, book_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/cart/clear",
    tag = "Cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cart cleared", body = ApiResponse<CartResponse>),
        (status = 404, description = "Cart not found", body = ErrorResponse)
    )
)]
pub async fn clear_cart(
    Extension(service): Extension<DynCartService>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.clear_cart(user.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cart", get(get_cart))
        .route("/api/cart/add", post(add_to_cart))
        .route("/api/cart/update", put(update_cart_item))
        .route("/api/cart/remove/{book_id}", delete(remove_cart_item))
        .route("/api/cart/clear", delete(clear_cart))
        .route_layer(middleware::from_fn(user_auth))
        .layer(Extension(app_state.di_container.cart_service.clone()))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
