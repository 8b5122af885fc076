//! ListUsersHandler - Admin-gated user listing.

use std::sync::Arc;

use crate::application::authorization::require_permission;
use crate::domain::foundation::{DomainError, Identity, Permission};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Query handler for the admin user listing.
pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, identity: Option<&Identity>) -> Result<Vec<User>, DomainError> {
        require_permission(identity, Permission::Admin)?;
        self.users.list().await
    }
}
