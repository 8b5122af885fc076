//! In-memory `ItemRepository`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::catalog::{Item, ItemUpdate, NewItem};
use crate::domain::foundation::{DomainError, ErrorCode, ItemId, Timestamp};
use crate::ports::ItemRepository;

/// Vec-backed catalog store.
pub struct InMemoryItemRepository {
    items: Mutex<Vec<Item>>,
    fail: AtomicBool,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// Snapshot of an item for join resolution (cart adapter, tests).
    pub fn get(&self, id: &ItemId) -> Option<Item> {
        self.items.lock().unwrap().iter().find(|i| &i.id == id).cloned()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated catalog store failure",
            ));
        }
        Ok(())
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: NewItem) -> Result<Item, DomainError> {
        self.check_failure()?;
        let created = Item {
            id: ItemId::new(),
            title: item.title,
            description: item.description,
            price_cents: item.price_cents,
            image: item.image,
            large_image: item.large_image,
            category_id: item.category_id,
            subcategory_id: item.subcategory_id,
            created_at: Timestamp::now(),
        };
        self.items.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        self.check_failure()?;
        Ok(self.get(id))
    }

    async fn update(&self, id: &ItemId, update: ItemUpdate) -> Result<Option<Item>, DomainError> {
        self.check_failure()?;
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                update.apply_to(item);
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        self.check_failure()?;
        let mut items = self.items.lock().unwrap();
        match items.iter().position(|i| &i.id == id) {
            Some(pos) => Ok(Some(items.remove(pos))),
            None => Ok(None),
        }
    }
}
