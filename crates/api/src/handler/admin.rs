use crate::middleware::{jwt::admin_auth, validate::SimpleValidatedJson};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::{DynActivityService, DynAdminService},
    domain::{
        requests::{LoginRequest, RegisterAdminRequest},
        responses::{ActivityResponse, AdminAuthResponse, ApiResponse},
    },
    errors::{ErrorResponse, HttpError},
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/admin/register",
    tag = "Admin",
    request_body = RegisterAdminRequest,
    responses(
        (status = 201, description = "Admin registered", body = ApiResponse<AdminAuthResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Admin registration is disabled", body = ErrorResponse),
        (status = 409, description = "Admin already exists", body = ErrorResponse)
    )
)]
pub async fn register_admin_handler(
    Extension(service): Extension<DynAdminService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterAdminRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register_admin(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AdminAuthResponse>),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account is disabled", body = ErrorResponse)
    )
)]
pub async fn login_admin_handler(
    Extension(service): Extension<DynAdminService>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login_admin(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/activity",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Latest admin activity, newest first", body = ApiResponse<Vec<ActivityResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_activity_handler(
    Extension(service): Extension<DynActivityService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.recent().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn admin_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/admin/register", post(register_admin_handler))
        .route("/api/admin/login", post(login_admin_handler));

    let private_routes = OpenApiRouter::new()
        .route("/api/admin/activity", get(get_activity_handler))
        .route_layer(middleware::from_fn(admin_auth))
        .layer(Extension(app_state.di_container.activity_service.clone()));

    public_routes
        .merge(private_routes)
        .layer(Extension(app_state.di_container.admin_service.clone()))
}
