//! Route table for catalog endpoints.

use axum::routing::{patch, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", post(handlers::create_item))
        .route(
            "/items/:id",
            patch(handlers::update_item).delete(handlers::delete_item),
        )
}
