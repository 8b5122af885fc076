//! Ownership trait for user-owned resources.
//!
//! Cart entries and orders are scoped to the user that created them. The
//! authorization policy combines `owner_id` with the requester's permission
//! set for the owner-or-admin checks.

use super::UserId;

/// Trait for resources that have a single owning user.
pub trait OwnedByUser {
    /// Returns the id of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }
}
