//! ResetPasswordHandler - Command handler for consuming a reset token.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::user::{AccountError, User, RESET_TOKEN_TTL_SECS};
use crate::ports::{CredentialHasher, UserRepository};

/// Command to rotate a password with a reset token.
#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    pub token: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

/// Handler for password reset.
///
/// Token consumption is one conditional update in the store: match, rotate
/// the hash, clear the token fields. Two racing requests with the same token
/// cannot both succeed.
pub struct ResetPasswordHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl ResetPasswordHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: ResetPasswordCommand) -> Result<User, AccountError> {
        // 1. The two supplied passwords must agree
        if cmd.password != cmd.confirm_password {
            return Err(AccountError::PasswordMismatch);
        }

        // 2. A token must be present
        let token = match cmd.token.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AccountError::MissingToken),
        };

        // 3. Hash before the conditional update so a hasher failure cannot
        //    half-consume the token
        let new_hash = self
            .hasher
            .hash(&cmd.password)
            .map_err(|e| AccountError::infrastructure(e.to_string()))?;

        // 4. Consume: the stored expiry must be no older than one hour before
        //    now. The window looks backwards from the current time; a token
        //    stamped with a future expiry inside that window matches.
        let cutoff = Timestamp::now().minus_secs(RESET_TOKEN_TTL_SECS);
        let user = self
            .users
            .consume_reset_token(token, cutoff, &new_hash)
            .await?
            .ok_or(AccountError::InvalidOrExpiredToken)?;

        tracing::info!(user_id = %user.id, "Password rotated via reset token");
        Ok(user)
    }
}
