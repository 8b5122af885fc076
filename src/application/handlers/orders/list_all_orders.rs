//! ListAllOrdersHandler - Admin view over every order, newest first.

use std::sync::Arc;

use crate::application::authorization::require_permission;
use crate::domain::foundation::{DomainError, Identity, Permission};
use crate::domain::order::Order;
use crate::ports::OrderRepository;

/// Query handler for the admin order listing.
pub struct ListAllOrdersHandler {
    orders: Arc<dyn OrderRepository>,
}

impl ListAllOrdersHandler {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    pub async fn handle(&self, identity: Option<&Identity>) -> Result<Vec<Order>, DomainError> {
        require_permission(identity, Permission::Admin)?;
        self.orders.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryOrderRepository;
    use crate::domain::foundation::{ErrorCode, PermissionSet, UserId};
    use crate::domain::order::NewOrder;

    fn identity(permissions: Vec<Permission>) -> Identity {
        Identity::new(
            UserId::new(),
            "x@example.com",
            PermissionSet::new(permissions).unwrap(),
        )
    }

    #[tokio::test]
    async fn admin_sees_every_order() {
        let orders = Arc::new(InMemoryOrderRepository::new());
        for total in [100, 200] {
            orders
                .create(NewOrder {
                    user_id: UserId::new(),
                    total_cents: total,
                    charge_id: "ch".into(),
                    items: vec![],
                })
                .await
                .unwrap();
        }
        let handler = ListAllOrdersHandler::new(orders);

        let listed = handler.handle(Some(&identity(vec![Permission::Admin]))).await.unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn non_admin_is_forbidden() {
        let handler = ListAllOrdersHandler::new(Arc::new(InMemoryOrderRepository::new()));
        let err = handler
            .handle(Some(&identity(vec![Permission::User])))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
