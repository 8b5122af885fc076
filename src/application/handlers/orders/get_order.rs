//! GetOrderHandler - Single-order read, owner-or-admin gated.

use std::sync::Arc;

use crate::application::authorization::{require_identity, require_owner_or_admin};
use crate::domain::foundation::{DomainError, Identity, OrderId};
use crate::domain::order::Order;
use crate::ports::OrderRepository;

/// Query for one order by id.
#[derive(Debug, Clone)]
pub struct GetOrderQuery {
    pub order_id: OrderId,
}

/// Handler for single-order reads.
pub struct GetOrderHandler {
    orders: Arc<dyn OrderRepository>,
}

impl GetOrderHandler {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    pub async fn handle(
        &self,
        identity: Option<&Identity>,
        query: GetOrderQuery,
    ) -> Result<Order, DomainError> {
        let identity = require_identity(identity)?;

        let order = self
            .orders
            .find_by_id(&query.order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order"))?;

        require_owner_or_admin(identity, &order)?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryOrderRepository;
    use crate::domain::foundation::{ErrorCode, Permission, PermissionSet, UserId};
    use crate::domain::order::NewOrder;

    async fn seeded() -> (GetOrderHandler, OrderId, UserId) {
        let orders = Arc::new(InMemoryOrderRepository::new());
        let owner = UserId::new();
        let order = orders
            .create(NewOrder {
                user_id: owner,
                total_cents: 2200,
                charge_id: "ch_1".into(),
                items: vec![],
            })
            .await
            .unwrap();
        (GetOrderHandler::new(orders), order.id, owner)
    }

    fn identity_for(user_id: UserId, permissions: Vec<Permission>) -> Identity {
        Identity::new(user_id, "x@example.com", PermissionSet::new(permissions).unwrap())
    }

    #[tokio::test]
    async fn owner_reads_own_order() {
        let (handler, order_id, owner) = seeded().await;
        let identity = identity_for(owner, vec![Permission::User]);

        let order = handler
            .handle(Some(&identity), GetOrderQuery { order_id })
            .await
            .unwrap();
        assert_eq!(order.total_cents, 2200);
    }

    #[tokio::test]
    async fn admin_reads_foreign_order() {
        let (handler, order_id, _) = seeded().await;
        let admin = identity_for(UserId::new(), vec![Permission::Admin]);

        assert!(handler
            .handle(Some(&admin), GetOrderQuery { order_id })
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn stranger_is_forbidden() {
        let (handler, order_id, _) = seeded().await;
        let stranger = identity_for(UserId::new(), vec![Permission::User]);

        let err = handler
            .handle(Some(&stranger), GetOrderQuery { order_id })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let (handler, _, owner) = seeded().await;
        let identity = identity_for(owner, vec![Permission::User]);

        let err = handler
            .handle(Some(&identity), GetOrderQuery { order_id: OrderId::new() })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
