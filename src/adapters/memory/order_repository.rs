//! In-memory `OrderRepository`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, OrderId, Timestamp, UserId};
use crate::domain::order::{NewOrder, Order};
use crate::ports::OrderRepository;

/// Vec-backed order store.
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
    fail: AtomicBool,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated order store failure",
            ));
        }
        Ok(())
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        self.check_failure()?;
        let created = Order {
            id: OrderId::new(),
            user_id: order.user_id,
            total_cents: order.total_cents,
            charge_id: order.charge_id,
            items: order.items,
            created_at: Timestamp::now(),
        };
        self.orders.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        self.check_failure()?;
        Ok(self.orders.lock().unwrap().iter().find(|o| &o.id == id).cloned())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError> {
        self.check_failure()?;
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        self.check_failure()?;
        let mut orders = self.orders.lock().unwrap().clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_order(user_id: UserId, total_cents: i64) -> NewOrder {
        NewOrder {
            user_id,
            total_cents,
            charge_id: "ch_test".into(),
            items: vec![],
        }
    }

    #[tokio::test]
    async fn list_for_user_filters_by_owner() {
        let repo = InMemoryOrderRepository::new();
        let alice = UserId::new();
        let bob = UserId::new();
        repo.create(new_order(alice, 100)).await.unwrap();
        repo.create(new_order(bob, 200)).await.unwrap();

        let got = repo.list_for_user(&alice).await.unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].total_cents, 100);
    }

    #[tokio::test]
    async fn list_all_returns_newest_first() {
        let repo = InMemoryOrderRepository::new();
        let user = UserId::new();
        repo.create(new_order(user, 1)).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        repo.create(new_order(user, 2)).await.unwrap();

        let got = repo.list_all().await.unwrap();
        assert_eq!(got[0].total_cents, 2);
    }
}
