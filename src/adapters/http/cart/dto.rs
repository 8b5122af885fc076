//! Request/response DTOs for cart endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::cart::CartItem;
use crate::domain::foundation::{CartItemId, ItemId, Timestamp, UserId};

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub item_id: ItemId,
}

#[derive(Debug, Serialize)]
pub struct CartItemResponse {
    pub id: CartItemId,
    pub user_id: UserId,
    pub item_id: ItemId,
    pub quantity: u32,
    pub added_at: Timestamp,
}

impl From<CartItem> for CartItemResponse {
    fn from(entry: CartItem) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            item_id: entry.item_id,
            quantity: entry.quantity,
            added_at: entry.added_at,
        }
    }
}
