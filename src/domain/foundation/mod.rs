//! Foundation types shared by every domain module.
//!
//! Value objects (ids, timestamps), the error taxonomy, identity and
//! permission types, and the ownership trait used for resource-scoped
//! authorization.

mod auth;
mod errors;
mod ids;
mod ownership;
mod permissions;
mod timestamp;

pub use auth::{AuthError, Identity};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CartItemId, ItemId, OrderId, OrderItemId, UserId};
pub use ownership::OwnedByUser;
pub use permissions::{Permission, PermissionSet};
pub use timestamp::Timestamp;

/// Hex-encodes a byte slice (lowercase).
///
/// Used for reset-token material; kept here so adapters and handlers share
/// one implementation.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
