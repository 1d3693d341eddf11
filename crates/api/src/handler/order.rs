use crate::middleware::{
    jwt::{AuthAdmin, AuthUser, admin_auth, user_auth},
    validate::SimpleValidatedJson,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::{ConfirmPaymentQuery, CreateOrderRequest, FindAllOrders, UpdateOrderRequest},
        responses::{ApiResponse, CreateOrderResponse, OrderListResponse, OrderResponse},
    },
    errors::{ErrorResponse, HttpError},
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/order",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = ApiResponse<CreateOrderResponse>),
        (status = 400, description = "Invalid order", body = ErrorResponse),
        (status = 502, description = "Payment initialization failed", body = ErrorResponse)
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(&user, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/order/confirm",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(ConfirmPaymentQuery),
    responses(
        (status = 200, description = "Payment confirmed", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Payment not completed", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn confirm_payment(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Query(params): Query<ConfirmPaymentQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.confirm_payment(user.id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/order/user",
    tag = "Order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's orders, newest first", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_my_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_user(user.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/order",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(FindAllOrders),
    responses(
        (status = 200, description = "Orders with status counts", body = ApiResponse<OrderListResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Query(params): Query<FindAllOrders>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/order/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/order/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderResponse>),
        (status = 400, description = "No valid fields to update", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(AuthAdmin(admin)): Extension<AuthAdmin>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_order(&admin, id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/order/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(AuthAdmin(admin)): Extension<AuthAdmin>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_order(&admin, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let di = &app_state.di_container;

    let user_routes = OpenApiRouter::new()
        .route("/api/order", post(create_order))
        .route("/api/order/confirm", get(confirm_payment))
        .route("/api/order/user", get(get_my_orders))
        .route_layer(middleware::from_fn(user_auth))
        .layer(Extension(di.auth_service.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/order", get(get_orders))
        .route(
            "/api/order/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route_layer(middleware::from_fn(admin_auth))
        .layer(Extension(di.admin_service.clone()));

    user_routes
        .merge(admin_routes)
        .layer(Extension(di.order_service.query.clone()))
        .layer(Extension(di.order_service.command.clone()))
}
