//! Order persistence port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrderId, UserId};
use crate::domain::order::{NewOrder, Order};

/// Persistence contract for orders.
///
/// `create` must write the order and all of its lines in one transaction; a
/// half-written order is never observable.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError>;

    /// Single order with its lines.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Orders owned by the given user.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError>;

    /// Every order, newest first.
    async fn list_all(&self) -> Result<Vec<Order>, DomainError>;
}
