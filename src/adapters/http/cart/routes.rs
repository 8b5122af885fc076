//! Route table for cart endpoints.

use axum::routing::{delete, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cart", post(handlers::add_to_cart))
        .route("/cart/:id", delete(handlers::remove_from_cart))
}
