//! DeleteItemHandler - Admin-gated catalog item deletion.

use std::sync::Arc;

use crate::application::authorization::{require_identity, require_permission};
use crate::domain::catalog::Item;
use crate::domain::foundation::{DomainError, Identity, ItemId, Permission};
use crate::ports::ItemRepository;

/// Command to delete a catalog item.
#[derive(Debug, Clone)]
pub struct DeleteItemCommand {
    pub item_id: ItemId,
}

/// Handler for item deletion. Returns the removed item.
pub struct DeleteItemHandler {
    items: Arc<dyn ItemRepository>,
}

impl DeleteItemHandler {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    pub async fn handle(
        &self,
        identity: Option<&Identity>,
        cmd: DeleteItemCommand,
    ) -> Result<Item, DomainError> {
        require_identity(identity)?;

        // Load first so a missing item reads as NotFound rather than
        // Forbidden for non-admins probing ids.
        if self.items.find_by_id(&cmd.item_id).await?.is_none() {
            return Err(DomainError::not_found("Item"));
        }

        let admin = require_permission(identity, Permission::Admin)?;

        let deleted = self
            .items
            .delete(&cmd.item_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))?;

        tracing::info!(admin_id = %admin.user_id, item_id = %deleted.id, "Catalog item deleted");
        Ok(deleted)
    }
}
