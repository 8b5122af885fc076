//! AddToCartHandler - Puts an item in the requester's cart.

use std::sync::Arc;

use crate::application::authorization::require_identity;
use crate::domain::cart::CartItem;
use crate::domain::foundation::{DomainError, Identity, ItemId};
use crate::ports::{CartRepository, ItemRepository};

/// Command to add one unit of an item to the requester's cart.
#[derive(Debug, Clone)]
pub struct AddToCartCommand {
    pub item_id: ItemId,
}

/// Handler for cart additions.
///
/// Adding an item that is already in the cart increments its quantity;
/// otherwise a new entry starts at quantity 1.
pub struct AddToCartHandler {
    cart: Arc<dyn CartRepository>,
    items: Arc<dyn ItemRepository>,
}

impl AddToCartHandler {
    pub fn new(cart: Arc<dyn CartRepository>, items: Arc<dyn ItemRepository>) -> Self {
        Self { cart, items }
    }

    pub async fn handle(
        &self,
        identity: Option<&Identity>,
        cmd: AddToCartCommand,
    ) -> Result<CartItem, DomainError> {
        let identity = require_identity(identity)?;

        if self.items.find_by_id(&cmd.item_id).await?.is_none() {
            return Err(DomainError::not_found("Item"));
        }

        match self.cart.find_entry(&identity.user_id, &cmd.item_id).await? {
            Some(existing) => {
                self.cart
                    .set_quantity(&existing.id, existing.quantity + 1)
                    .await
            }
            None => self.cart.create(&identity.user_id, &cmd.item_id).await,
        }
    }
}
