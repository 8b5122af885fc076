//! Catalog item persistence port.

use async_trait::async_trait;

use crate::domain::catalog::{Item, ItemUpdate, NewItem};
use crate::domain::foundation::{DomainError, ItemId};

/// Persistence contract for catalog items.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, item: NewItem) -> Result<Item, DomainError>;

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError>;

    /// Applies a partial update; returns `None` when the item does not exist.
    async fn update(&self, id: &ItemId, update: ItemUpdate) -> Result<Option<Item>, DomainError>;

    /// Deletes and returns the item; `None` when it did not exist.
    async fn delete(&self, id: &ItemId) -> Result<Option<Item>, DomainError>;
}
