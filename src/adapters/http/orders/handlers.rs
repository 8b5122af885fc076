//! HTTP handlers for order and checkout endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::checkout::CreateOrderCommand;
use crate::application::handlers::orders::GetOrderQuery;
use crate::domain::foundation::{DomainError, ErrorCode, OrderId};

use super::super::error::ApiError;
use super::super::middleware::OptionalIdentity;
use super::super::state::AppState;
use super::dto::{CreateOrderRequest, OrderResponse};

/// POST /api/orders - Convert the requester's cart into an order
///
/// The pipeline runs on its own task: once the charge captures, order
/// materialization and cart cleanup must finish even if the client
/// disconnects and this request future is dropped.
pub async fn create_order(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Response, ApiError> {
    let handler = state.create_order.clone();
    let cmd = CreateOrderCommand { payment_source: req.token };

    let result = tokio::spawn(async move { handler.handle(identity.as_ref(), cmd).await })
        .await
        .map_err(|e| {
            ApiError(DomainError::new(
                ErrorCode::InternalError,
                format!("Checkout task failed: {}", e),
            ))
        })?;

    let order = result?;
    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))).into_response())
}

/// GET /api/orders/:id - A single order (owner or admin)
pub async fn get_order(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Path(order_id): Path<String>,
) -> Result<Response, ApiError> {
    let order_id = order_id
        .parse::<OrderId>()
        .map_err(|_| ApiError(DomainError::validation("order_id", "Invalid order id")))?;

    let order = state
        .get_order
        .handle(identity.as_ref(), GetOrderQuery { order_id })
        .await?;

    Ok(Json(OrderResponse::from(order)).into_response())
}

/// GET /api/orders - The requester's order history
pub async fn list_orders(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response, ApiError> {
    let orders = state.list_orders.handle(identity.as_ref()).await?;
    let body: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok(Json(body).into_response())
}

/// GET /api/admin/orders - Every order, newest first (admin)
pub async fn list_all_orders(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response, ApiError> {
    let orders = state.list_all_orders.handle(identity.as_ref()).await?;
    let body: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok(Json(body).into_response())
}
