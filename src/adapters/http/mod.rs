//! HTTP transport: routes, middleware, DTOs, error mapping.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod middleware;
pub mod orders;
pub mod session_cookie;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use state::{AppState, SessionCookieSettings};

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assembles the full application router.
///
/// The identity middleware runs on every route; CORS is locked to the
/// frontend origin with credentials enabled so the session cookie flows.
pub fn build_router(state: AppState, frontend_url: &str) -> Router {
    let origin = frontend_url
        .parse::<HeaderValue>()
        .expect("Invalid frontend URL");

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let api = account::router()
        .merge(catalog::router())
        .merge(cart::router())
        .merge(orders::router());

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::identity_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
