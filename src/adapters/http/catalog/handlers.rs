//! HTTP handlers for catalog endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::catalog::{
    CreateItemCommand, DeleteItemCommand, UpdateItemCommand,
};
use crate::domain::foundation::{DomainError, ItemId};

use super::super::error::ApiError;
use super::super::middleware::OptionalIdentity;
use super::super::state::AppState;
use super::dto::{CreateItemRequest, ItemResponse, UpdateItemRequest};

fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse::<ItemId>()
        .map_err(|_| ApiError(DomainError::validation("item_id", "Invalid item id")))
}

/// POST /api/items - Create a catalog item (admin)
pub async fn create_item(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Json(req): Json<CreateItemRequest>,
) -> Result<Response, ApiError> {
    let item = state
        .create_item
        .handle(identity.as_ref(), CreateItemCommand { item: req.into() })
        .await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))).into_response())
}

/// PATCH /api/items/:id - Update a catalog item (admin)
pub async fn update_item(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Path(item_id): Path<String>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Response, ApiError> {
    let item_id = parse_item_id(&item_id)?;
    let item = state
        .update_item
        .handle(
            identity.as_ref(),
            UpdateItemCommand { item_id, update: req.into() },
        )
        .await?;

    Ok(Json(ItemResponse::from(item)).into_response())
}

/// DELETE /api/items/:id - Delete a catalog item (admin)
pub async fn delete_item(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Path(item_id): Path<String>,
) -> Result<Response, ApiError> {
    let item_id = parse_item_id(&item_id)?;
    let item = state
        .delete_item
        .handle(identity.as_ref(), DeleteItemCommand { item_id })
        .await?;

    Ok(Json(ItemResponse::from(item)).into_response())
}
