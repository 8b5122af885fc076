//! User persistence port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PermissionSet, Timestamp, UserId};
use crate::domain::user::{NewUser, User};

/// Persistence contract for user accounts.
///
/// Reset-token consumption is a single conditional update so concurrent
/// consumers cannot both succeed; implementations must not emulate it with a
/// read followed by a write.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates an account. Fails with a validation error when the normalized
    /// email is already registered.
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Lookup by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// All accounts, for the admin user listing.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Stores a reset token and its expiry on the account.
    async fn set_reset_token(
        &self,
        id: &UserId,
        token: &str,
        expiry: Timestamp,
    ) -> Result<(), DomainError>;

    /// Atomically consumes a reset token: matches an account whose stored
    /// token equals `token` and whose expiry is at or after `cutoff`, writes
    /// `new_password_hash`, clears both token fields, and returns the updated
    /// account. Returns `None` when no account matched (wrong token, already
    /// consumed, or outside the window).
    async fn consume_reset_token(
        &self,
        token: &str,
        cutoff: Timestamp,
        new_password_hash: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Replaces the account's permission set.
    async fn update_permissions(
        &self,
        id: &UserId,
        permissions: PermissionSet,
    ) -> Result<User, DomainError>;
}
