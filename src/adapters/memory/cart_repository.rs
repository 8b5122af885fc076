//! In-memory `CartRepository`.
//!
//! Resolves `load_cart` joins against an `InMemoryItemRepository`, the same
//! shape the SQL adapter produces with a join.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::cart::{CartEntry, CartItem, ItemSnapshot};
use crate::domain::foundation::{CartItemId, DomainError, ErrorCode, ItemId, Timestamp, UserId};
use crate::ports::CartRepository;

use super::InMemoryItemRepository;

/// Vec-backed cart store.
pub struct InMemoryCartRepository {
    entries: Mutex<Vec<CartItem>>,
    items: Arc<InMemoryItemRepository>,
    fail: AtomicBool,
    fail_delete_many: AtomicBool,
}

impl InMemoryCartRepository {
    pub fn new(items: Arc<InMemoryItemRepository>) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            items,
            fail: AtomicBool::new(false),
            fail_delete_many: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Fails only the bulk delete, for post-charge failure tests.
    pub fn set_failing_delete_many(&self, failing: bool) {
        self.fail_delete_many.store(failing, Ordering::SeqCst);
    }

    pub fn count_for_user(&self, user_id: &UserId) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| &e.user_id == user_id)
            .count()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated cart store failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn find_entry(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
    ) -> Result<Option<CartItem>, DomainError> {
        self.check_failure()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.user_id == user_id && &e.item_id == item_id)
            .cloned())
    }

    async fn find_by_id(&self, id: &CartItemId) -> Result<Option<CartItem>, DomainError> {
        self.check_failure()?;
        Ok(self.entries.lock().unwrap().iter().find(|e| &e.id == id).cloned())
    }

    async fn create(&self, user_id: &UserId, item_id: &ItemId) -> Result<CartItem, DomainError> {
        self.check_failure()?;
        let entry = CartItem {
            id: CartItemId::new(),
            user_id: *user_id,
            item_id: *item_id,
            quantity: 1,
            added_at: Timestamp::now(),
        };
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn set_quantity(
        &self,
        id: &CartItemId,
        quantity: u32,
    ) -> Result<CartItem, DomainError> {
        self.check_failure()?;
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| DomainError::not_found("CartItem"))?;
        entry.quantity = quantity;
        Ok(entry.clone())
    }

    async fn load_cart(&self, user_id: &UserId) -> Result<Vec<CartEntry>, DomainError> {
        self.check_failure()?;
        let entries = self.entries.lock().unwrap();
        entries
            .iter()
            .filter(|e| &e.user_id == user_id)
            .map(|e| {
                let item = self.items.get(&e.item_id).ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Cart entry {} references missing item", e.id),
                    )
                })?;
                Ok(CartEntry {
                    cart_item_id: e.id,
                    quantity: e.quantity,
                    item: ItemSnapshot {
                        item_id: item.id,
                        title: item.title,
                        description: item.description,
                        price_cents: item.price_cents,
                        image: item.image,
                        large_image: item.large_image,
                    },
                })
            })
            .collect()
    }

    async fn delete(&self, id: &CartItemId) -> Result<(), DomainError> {
        self.check_failure()?;
        self.entries.lock().unwrap().retain(|e| &e.id != id);
        Ok(())
    }

    async fn delete_many(&self, ids: &[CartItemId]) -> Result<u64, DomainError> {
        self.check_failure()?;
        if self.fail_delete_many.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated cart cleanup failure",
            ));
        }
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !ids.contains(&e.id));
        Ok((before - entries.len()) as u64)
    }
}
