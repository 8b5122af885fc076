//! CreateItemHandler - Admin-gated catalog item creation.

use std::sync::Arc;

use crate::application::authorization::require_permission;
use crate::domain::catalog::{Item, NewItem};
use crate::domain::foundation::{DomainError, Identity, Permission};
use crate::ports::ItemRepository;

/// Command to create a catalog item.
#[derive(Debug, Clone)]
pub struct CreateItemCommand {
    pub item: NewItem,
}

/// Handler for item creation.
pub struct CreateItemHandler {
    items: Arc<dyn ItemRepository>,
}

impl CreateItemHandler {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    pub async fn handle(
        &self,
        identity: Option<&Identity>,
        cmd: CreateItemCommand,
    ) -> Result<Item, DomainError> {
        let admin = require_permission(identity, Permission::Admin)?;
        cmd.item.validate()?;

        let item = self.items.create(cmd.item).await?;
        tracing::info!(admin_id = %admin.user_id, item_id = %item.id, "Catalog item created");
        Ok(item)
    }
}
