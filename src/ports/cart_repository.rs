//! Cart persistence port.

use async_trait::async_trait;

use crate::domain::cart::{CartEntry, CartItem};
use crate::domain::foundation::{CartItemId, DomainError, ItemId, UserId};

/// Persistence contract for cart entries.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Finds the entry for (user, item), if any.
    async fn find_entry(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
    ) -> Result<Option<CartItem>, DomainError>;

    async fn find_by_id(&self, id: &CartItemId) -> Result<Option<CartItem>, DomainError>;

    /// Creates an entry at quantity 1.
    async fn create(&self, user_id: &UserId, item_id: &ItemId) -> Result<CartItem, DomainError>;

    /// Sets an entry's quantity (always >= 1).
    async fn set_quantity(&self, id: &CartItemId, quantity: u32)
        -> Result<CartItem, DomainError>;

    /// The user's full cart, each line joined with its item snapshot.
    async fn load_cart(&self, user_id: &UserId) -> Result<Vec<CartEntry>, DomainError>;

    async fn delete(&self, id: &CartItemId) -> Result<(), DomainError>;

    /// Bulk delete by id set. Ids that no longer exist are skipped, not
    /// errors; returns the number of rows actually removed.
    async fn delete_many(&self, ids: &[CartItemId]) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CartRepository) {}
    }
}
