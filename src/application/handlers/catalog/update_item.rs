//! UpdateItemHandler - Admin-gated catalog item update.

use std::sync::Arc;

use crate::application::authorization::require_permission;
use crate::domain::catalog::{Item, ItemUpdate};
use crate::domain::foundation::{DomainError, Identity, ItemId, Permission};
use crate::ports::ItemRepository;

/// Command to partially update a catalog item.
#[derive(Debug, Clone)]
pub struct UpdateItemCommand {
    pub item_id: ItemId,
    pub update: ItemUpdate,
}

/// Handler for item updates.
pub struct UpdateItemHandler {
    items: Arc<dyn ItemRepository>,
}

impl UpdateItemHandler {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    pub async fn handle(
        &self,
        identity: Option<&Identity>,
        cmd: UpdateItemCommand,
    ) -> Result<Item, DomainError> {
        require_permission(identity, Permission::Admin)?;
        cmd.update.validate()?;

        self.items
            .update(&cmd.item_id, cmd.update)
            .await?
            .ok_or_else(|| DomainError::not_found("Item"))
    }
}
