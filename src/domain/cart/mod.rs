//! Cart entries and the joined projection used by checkout.

use serde::Serialize;

use crate::domain::foundation::{
    CartItemId, ItemId, OwnedByUser, Timestamp, UserId, ValidationError,
};

/// One line of a user's live cart.
///
/// Quantity is always at least 1; removing the last unit deletes the row.
#[derive(Debug, Clone, Serialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub item_id: ItemId,
    pub quantity: u32,
    pub added_at: Timestamp,
}

impl CartItem {
    /// Validates the quantity invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity == 0 {
            return Err(ValidationError::invalid_format(
                "quantity",
                "cart quantity must be at least 1",
            ));
        }
        Ok(())
    }
}

impl OwnedByUser for CartItem {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}

/// The sellable fields of an item as seen by the cart join.
///
/// Checkout copies these into frozen order lines; category relations are not
/// part of the projection.
#[derive(Debug, Clone, Serialize)]
pub struct ItemSnapshot {
    pub item_id: ItemId,
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub image: Option<String>,
    pub large_image: Option<String>,
}

/// A cart line joined with its item snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CartEntry {
    pub cart_item_id: CartItemId,
    pub quantity: u32,
    pub item: ItemSnapshot,
}

impl CartEntry {
    /// Line total in minor-currency units. Integer arithmetic only.
    pub fn line_total_cents(&self) -> i64 {
        self.item.price_cents * i64::from(self.quantity)
    }
}

/// Sums line totals across a cart. Integer arithmetic only.
pub fn cart_total_cents(entries: &[CartEntry]) -> i64 {
    entries.iter().map(CartEntry::line_total_cents).sum()
}
