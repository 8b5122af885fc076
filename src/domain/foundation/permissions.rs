//! Permission labels and the per-user permission set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A named privilege attached to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// Baseline capability every signed-up account carries.
    User,

    /// Grants catalog mutation, user administration, and all-orders access.
    Admin,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::User => "USER",
            Permission::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Permission::User),
            "ADMIN" => Ok(Permission::Admin),
            other => Err(ValidationError::invalid_format(
                "permission",
                format!("unknown label '{}'", other),
            )),
        }
    }
}

/// Ordered, non-empty set of permission labels.
///
/// A user always carries at least one label; constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(Vec<Permission>);

impl PermissionSet {
    /// Creates a permission set, rejecting an empty list.
    pub fn new(permissions: Vec<Permission>) -> Result<Self, ValidationError> {
        if permissions.is_empty() {
            return Err(ValidationError::empty_field("permissions"));
        }
        let mut deduped = Vec::with_capacity(permissions.len());
        for p in permissions {
            if !deduped.contains(&p) {
                deduped.push(p);
            }
        }
        Ok(Self(deduped))
    }

    /// The set every fresh signup receives.
    pub fn standard() -> Self {
        Self(vec![Permission::User])
    }

    /// Checks whether the set contains the given label.
    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Returns the labels in order.
    pub fn labels(&self) -> &[Permission] {
        &self.0
    }
}
