//! Route table for order endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", post(handlers::create_order).get(handlers::list_orders))
        .route("/orders/:id", get(handlers::get_order))
        .route("/admin/orders", get(handlers::list_all_orders))
}
