//! RemoveFromCartHandler - Removes an entry from a cart.

use std::sync::Arc;

use crate::application::authorization::{require_identity, require_owner_or_admin};
use crate::domain::cart::CartItem;
use crate::domain::foundation::{CartItemId, DomainError, Identity};
use crate::ports::CartRepository;

/// Command to remove a cart entry.
#[derive(Debug, Clone)]
pub struct RemoveFromCartCommand {
    pub cart_item_id: CartItemId,
}

/// Handler for cart removal. The requester must own the entry or hold
/// admin.
pub struct RemoveFromCartHandler {
    cart: Arc<dyn CartRepository>,
}

impl RemoveFromCartHandler {
    pub fn new(cart: Arc<dyn CartRepository>) -> Self {
        Self { cart }
    }

    pub async fn handle(
        &self,
        identity: Option<&Identity>,
        cmd: RemoveFromCartCommand,
    ) -> Result<CartItem, DomainError> {
        let identity = require_identity(identity)?;

        let entry = self
            .cart
            .find_by_id(&cmd.cart_item_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Cart item"))?;

        require_owner_or_admin(identity, &entry)?;

        self.cart.delete(&entry.id).await?;
        Ok(entry)
    }
}
