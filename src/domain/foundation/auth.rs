//! Identity attached to a request after session resolution.
//!
//! The session middleware resolves the cookie token once per request and, on
//! success, loads the account's current permission set. Everything downstream
//! works with this `Identity` value; no handler re-reads the token.
//!
//! A request with no valid token is simply anonymous; operations that need
//! an identity fail at the policy layer, not here.

use thiserror::Error;

use super::{Permission, PermissionSet, UserId};

/// Authenticated requester: user id plus the permission set loaded for this
/// request.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: UserId,
    pub email: String,
    pub permissions: PermissionSet,
}

impl Identity {
    pub fn new(user_id: UserId, email: impl Into<String>, permissions: PermissionSet) -> Self {
        Self {
            user_id,
            email: email.into(),
            permissions,
        }
    }

    /// Checks whether this identity carries the given capability.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Convenience check for the admin capability.
    pub fn is_admin(&self) -> bool {
        self.has_permission(Permission::Admin)
    }
}

/// Errors from session-token issuance and verification.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid session token")]
    InvalidToken,

    /// The signing service could not produce or check a token.
    #[error("Credential service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_with(permissions: Vec<Permission>) -> Identity {
        Identity::new(
            UserId::new(),
            "user@example.com",
            PermissionSet::new(permissions).unwrap(),
        )
    }

    #[test]
    fn identity_reports_held_permission() {
        let identity = identity_with(vec![Permission::User]);
        assert!(identity.has_permission(Permission::User));
        assert!(!identity.has_permission(Permission::Admin));
    }

    #[test]
    fn is_admin_requires_admin_label() {
        assert!(!identity_with(vec![Permission::User]).is_admin());
        assert!(identity_with(vec![Permission::User, Permission::Admin]).is_admin());
    }

    #[test]
    fn auth_error_displays_message() {
        let err = AuthError::service_unavailable("signer offline");
        assert_eq!(
            format!("{}", err),
            "Credential service unavailable: signer offline"
        );
    }
}
