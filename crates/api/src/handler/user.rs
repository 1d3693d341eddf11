use crate::middleware::{
    jwt::{AuthUser, user_auth},
    validate::SimpleValidatedJson,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::DynAuthService,
    domain::{
        requests::{GoogleLoginRequest, LoginRequest, RegisterUserRequest},
        responses::{ApiResponse, UserAuthResponse, UserResponse},
    },
    errors::{ErrorResponse, HttpError},
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/user/register",
    tag = "User",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserAuthResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "User already exists", body = ErrorResponse)
    )
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register_user(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = "User",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<UserAuthResponse>),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login_user(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/user/google-login",
    tag = "User",
    request_body = GoogleLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<UserAuthResponse>),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse)
    )
)]
pub async fn google_login_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<GoogleLoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.google_login(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = "User",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_me_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_me(user.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let auth_service = app_state.di_container.auth_service.clone();

    let public_routes = OpenApiRouter::new()
        .route("/api/user/register", post(register_user_handler))
        .route("/api/user/login", post(login_user_handler))
        .route("/api/user/google-login", post(google_login_handler));

    let private_routes = OpenApiRouter::new()
        .route("/api/user/me", get(get_me_handler))
        .route_layer(middleware::from_fn(user_auth));

    public_routes
        .merge(private_routes)
        .layer(Extension(auth_service))
}
