//! ListOrdersHandler - The requester's own order history.

use std::sync::Arc;

use crate::application::authorization::require_identity;
use crate::domain::foundation::{DomainError, Identity};
use crate::domain::order::Order;
use crate::ports::OrderRepository;

/// Query handler for the requester's orders.
pub struct ListOrdersHandler {
    orders: Arc<dyn OrderRepository>,
}

impl ListOrdersHandler {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    pub async fn handle(&self, identity: Option<&Identity>) -> Result<Vec<Order>, DomainError> {
        let identity = require_identity(identity)?;
        self.orders.list_for_user(&identity.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryOrderRepository;
    use crate::domain::foundation::{ErrorCode, PermissionSet, UserId};
    use crate::domain::order::NewOrder;

    #[tokio::test]
    async fn lists_only_own_orders() {
        let orders = Arc::new(InMemoryOrderRepository::new());
        let alice = UserId::new();
        for (user, total) in [(alice, 100), (UserId::new(), 200)] {
            orders
                .create(NewOrder {
                    user_id: user,
                    total_cents: total,
                    charge_id: "ch".into(),
                    items: vec![],
                })
                .await
                .unwrap();
        }
        let handler = ListOrdersHandler::new(orders);
        let identity = Identity::new(alice, "a@b.c", PermissionSet::standard());

        let listed = handler.handle(Some(&identity)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].total_cents, 100);
    }

    #[tokio::test]
    async fn anonymous_is_unauthenticated() {
        let handler = ListOrdersHandler::new(Arc::new(InMemoryOrderRepository::new()));
        let err = handler.handle(None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }
}
