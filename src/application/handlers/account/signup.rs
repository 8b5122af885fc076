//! SignupHandler - Command handler for account creation.

use std::sync::Arc;

use crate::domain::foundation::PermissionSet;
use crate::domain::user::{validate_email, AccountError, NewUser, User};
use crate::ports::{CredentialHasher, UserRepository};

/// Command to create an account.
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub email: String,
    pub name: String,
    pub password: String,
    pub confirm_password: String,
}

/// Handler for account creation.
///
/// Every fresh account receives the standard permission set; elevation is a
/// separate admin-gated operation.
pub struct SignupHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl SignupHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: SignupCommand) -> Result<User, AccountError> {
        // 1. The two supplied passwords must agree
        if cmd.password != cmd.confirm_password {
            return Err(AccountError::PasswordMismatch);
        }
        if cmd.password.is_empty() {
            return Err(AccountError::validation("Password cannot be empty"));
        }

        // 2. Normalize the email before uniqueness is decided
        let email = validate_email(&cmd.email)?;

        // 3. Friendly duplicate check; the store's unique constraint is the
        //    final arbiter under races
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AccountError::email_taken(email));
        }

        // 4. Hash the credential
        let password_hash = self
            .hasher
            .hash(&cmd.password)
            .map_err(|e| AccountError::infrastructure(e.to_string()))?;

        // 5. Create the account with the standard permission set
        let user = self
            .users
            .create(NewUser {
                email,
                name: cmd.name,
                password_hash,
                permissions: PermissionSet::standard(),
            })
            .await?;

        tracing::info!(user_id = %user.id, "Account created");
        Ok(user)
    }
}
