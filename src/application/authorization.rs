//! Authorization policy.
//!
//! Every operation's entry gate lives here instead of being re-implemented
//! per handler. The policy is pure: it decides over an already-resolved
//! identity and already-loaded resources, and performs no I/O.
//!
//! Two independent predicates:
//!
//! - capability checks (`require_permission`) - fails `Unauthenticated` when
//!   the request is anonymous, `Forbidden` when the capability is missing;
//! - ownership checks (`require_owner_or_admin`) - grants when the identity
//!   owns the resource OR holds `Admin`, fails `Forbidden` otherwise.

use crate::domain::foundation::{
    DomainError, ErrorCode, Identity, OwnedByUser, Permission,
};

/// Fails with `Unauthenticated` when the request carries no identity.
pub fn require_identity(identity: Option<&Identity>) -> Result<&Identity, DomainError> {
    identity.ok_or_else(|| {
        DomainError::new(
            ErrorCode::Unauthenticated,
            "You must be signed in to do that",
        )
    })
}

/// Requires an identity holding the given capability.
pub fn require_permission(
    identity: Option<&Identity>,
    permission: Permission,
) -> Result<&Identity, DomainError> {
    let identity = require_identity(identity)?;
    if !identity.has_permission(permission) {
        return Err(DomainError::new(
            ErrorCode::Forbidden,
            format!("You need the {} permission to do that", permission),
        )
        .with_detail("required", permission.as_str())
        .with_detail("user_id", identity.user_id.to_string()));
    }
    Ok(identity)
}

/// Grants when the identity owns the resource or holds `Admin`.
pub fn require_owner_or_admin<T>(identity: &Identity, resource: &T) -> Result<(), DomainError>
where
    T: OwnedByUser,
{
    if resource.is_owner(&identity.user_id) || identity.is_admin() {
        return Ok(());
    }
    Err(DomainError::new(
        ErrorCode::Forbidden,
        "You do not have access to that resource",
    )
    .with_detail("owner_id", resource.owner_id().to_string())
    .with_detail("user_id", identity.user_id.to_string()))
}
