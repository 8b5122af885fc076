//! Route table for account endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/signin", post(handlers::signin))
        .route("/signout", post(handlers::signout))
        .route("/me", get(handlers::me))
        .route("/request-reset", post(handlers::request_reset))
        .route("/reset-password", post(handlers::reset_password))
        .route("/permissions", post(handlers::update_permissions))
        .route("/users", get(handlers::list_users))
}
