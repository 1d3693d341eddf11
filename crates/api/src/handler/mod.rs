mod admin;
mod book;
mod cart;
mod order;
mod user;

use crate::middleware::metrics::track_metrics;
use anyhow::Result;
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{state::AppState, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::admin::admin_routes;
pub use self::book::book_routes;
pub use self::cart::cart_routes;
pub use self::order::order_routes;
pub use self::user::user_routes;

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        user::register_user_handler,
        user::login_user_handler,
        user::google_login_handler,
        user::get_me_handler,

        admin::register_admin_handler,
        admin::login_admin_handler,
        admin::get_activity_handler,

        book::create_book,
        book::get_books,
        book::get_book,
        book::delete_book,

        cart::add_to_cart,
        cart::get_cart,
        cart::update_cart_item,
        cart::remove_cart_item,
        cart::clear_cart,

        order::create_order,
        order::confirm_payment,
        order::get_my_orders,
        order::get_orders,
        order::get_order,
        order::update_order,
        order::delete_order,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "User", description = "Customer accounts"),
        (name = "Admin", description = "Store administration"),
        (name = "Book", description = "Catalog"),
        (name = "Cart", description = "Shopping cart"),
        (name = "Order", description = "Orders and payment confirmation"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn health_checker_handler() -> &'static str {
    "API IS WORKING"
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("⚠️ Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Assembles every route, the docs and the cross-cutting layers.
pub fn build_router(shared_state: Arc<AppState>) -> Router {
    let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .route("/", get(health_checker_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(shared_state.clone())
        .merge(user_routes(shared_state.clone()))
        .merge(admin_routes(shared_state.clone()))
        .merge(book_routes(shared_state.clone()))
        .merge(cart_routes(shared_state.clone()))
        .merge(order_routes(shared_state.clone()));

    let (app_router, api) = api_router.split_for_parts();

    app_router
        .nest_service("/uploads", ServeDir::new(&shared_state.upload_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(middleware::from_fn_with_state(
            shared_state.clone(),
            track_metrics,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&shared_state.allowed_origins))
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = build_router(Arc::new(app_state));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
