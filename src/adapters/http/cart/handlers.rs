//! HTTP handlers for cart endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::cart::{AddToCartCommand, RemoveFromCartCommand};
use crate::domain::foundation::{CartItemId, DomainError};

use super::super::error::ApiError;
use super::super::middleware::OptionalIdentity;
use super::super::state::AppState;
use super::dto::{AddToCartRequest, CartItemResponse};

/// POST /api/cart - Add one unit of an item to the requester's cart
pub async fn add_to_cart(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Json(req): Json<AddToCartRequest>,
) -> Result<Response, ApiError> {
    let entry = state
        .add_to_cart
        .handle(identity.as_ref(), AddToCartCommand { item_id: req.item_id })
        .await?;

    Ok((StatusCode::CREATED, Json(CartItemResponse::from(entry))).into_response())
}

/// DELETE /api/cart/:id - Remove a cart entry (owner or admin)
pub async fn remove_from_cart(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Path(cart_item_id): Path<String>,
) -> Result<Response, ApiError> {
    let cart_item_id = cart_item_id
        .parse::<CartItemId>()
        .map_err(|_| ApiError(DomainError::validation("cart_item_id", "Invalid cart item id")))?;

    let removed = state
        .remove_from_cart
        .handle(identity.as_ref(), RemoveFromCartCommand { cart_item_id })
        .await?;

    Ok(Json(CartItemResponse::from(removed)).into_response())
}
