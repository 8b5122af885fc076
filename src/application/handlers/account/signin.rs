//! SigninHandler - Command handler for credential verification.

use std::sync::Arc;

use crate::domain::user::{normalize_email, AccountError, User};
use crate::ports::{CredentialHasher, UserRepository};

/// Command to sign in with email and password.
#[derive(Debug, Clone)]
pub struct SigninCommand {
    pub email: String,
    pub password: String,
}

/// Handler for signin.
pub struct SigninHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl SigninHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: SigninCommand) -> Result<User, AccountError> {
        let email = normalize_email(&cmd.email);

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AccountError::no_such_user(&email))?;

        let valid = self
            .hasher
            .verify(&cmd.password, &user.password_hash)
            .map_err(|e| AccountError::infrastructure(e.to_string()))?;

        if !valid {
            tracing::warn!(user_id = %user.id, "Signin with wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        Ok(user)
    }
}
