//! UpdatePermissionsHandler - Admin-gated permission mutation.

use std::sync::Arc;

use crate::application::authorization::require_permission;
use crate::domain::foundation::{DomainError, Identity, Permission, PermissionSet, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Command to replace a user's permission set.
#[derive(Debug, Clone)]
pub struct UpdatePermissionsCommand {
    pub user_id: UserId,
    pub permissions: Vec<Permission>,
}

/// Handler for permission updates. Admin only.
pub struct UpdatePermissionsHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdatePermissionsHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        identity: Option<&Identity>,
        cmd: UpdatePermissionsCommand,
    ) -> Result<User, DomainError> {
        let admin = require_permission(identity, Permission::Admin)?;

        let permissions = PermissionSet::new(cmd.permissions)?;

        if self.users.find_by_id(&cmd.user_id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }

        let updated = self.users.update_permissions(&cmd.user_id, permissions).await?;
        tracing::info!(
            admin_id = %admin.user_id,
            user_id = %updated.id,
            "Permission set replaced"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::user::NewUser;

    fn identity(permissions: Vec<Permission>) -> Identity {
        Identity::new(
            UserId::new(),
            "admin@example.com",
            PermissionSet::new(permissions).unwrap(),
        )
    }

    async fn seeded() -> (Arc<InMemoryUserRepository>, UserId) {
        let users = Arc::new(InMemoryUserRepository::new());
        let user = users
            .create(NewUser {
                email: "bob@example.com".into(),
                name: "Bob".into(),
                password_hash: "hash".into(),
                permissions: PermissionSet::standard(),
            })
            .await
            .unwrap();
        (users, user.id)
    }

    #[tokio::test]
    async fn admin_can_grant_admin() {
        let (users, target) = seeded().await;
        let handler = UpdatePermissionsHandler::new(users);
        let admin = identity(vec![Permission::User, Permission::Admin]);

        let updated = handler
            .handle(
                Some(&admin),
                UpdatePermissionsCommand {
                    user_id: target,
                    permissions: vec![Permission::User, Permission::Admin],
                },
            )
            .await
            .unwrap();

        assert!(updated.permissions.contains(Permission::Admin));
    }

    #[tokio::test]
    async fn non_admin_is_forbidden() {
        let (users, target) = seeded().await;
        let handler = UpdatePermissionsHandler::new(users.clone());
        let plain = identity(vec![Permission::User]);

        let err = handler
            .handle(
                Some(&plain),
                UpdatePermissionsCommand {
                    user_id: target,
                    permissions: vec![Permission::User, Permission::Admin],
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        let unchanged = users.find_by_id(&target).await.unwrap().unwrap();
        assert!(!unchanged.permissions.contains(Permission::Admin));
    }

    #[tokio::test]
    async fn anonymous_is_unauthenticated() {
        let (users, target) = seeded().await;
        let handler = UpdatePermissionsHandler::new(users);

        let err = handler
            .handle(
                None,
                UpdatePermissionsCommand {
                    user_id: target,
                    permissions: vec![Permission::User],
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }

    #[tokio::test]
    async fn empty_permission_set_is_rejected() {
        let (users, target) = seeded().await;
        let handler = UpdatePermissionsHandler::new(users);
        let admin = identity(vec![Permission::Admin]);

        let err = handler
            .handle(
                Some(&admin),
                UpdatePermissionsCommand {
                    user_id: target,
                    permissions: vec![],
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn unknown_target_is_not_found() {
        let (users, _) = seeded().await;
        let handler = UpdatePermissionsHandler::new(users);
        let admin = identity(vec![Permission::Admin]);

        let err = handler
            .handle(
                Some(&admin),
                UpdatePermissionsCommand {
                    user_id: UserId::new(),
                    permissions: vec![Permission::User],
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
