//! Session token port.

use crate::domain::foundation::{AuthError, UserId};

/// Port for signed session tokens.
///
/// A token carries the user id and issuance time, nothing else. The token is
/// the only session state; nothing is persisted server-side.
pub trait SessionTokens: Send + Sync {
    /// Issues a signed token for the given user.
    fn issue(&self, user_id: &UserId) -> Result<String, AuthError>;

    /// Verifies a token and extracts the user id.
    fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_tokens_is_object_safe() {
        fn _accepts_dyn(_tokens: &dyn SessionTokens) {}
    }
}
