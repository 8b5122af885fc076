//! RequestResetHandler - Command handler for issuing a password-reset token.

use std::sync::Arc;

use rand::RngCore;

use crate::domain::foundation::{hex_encode, Timestamp};
use crate::domain::user::{normalize_email, AccountError, RESET_TOKEN_TTL_SECS};
use crate::ports::{Mailer, OutboundEmail, UserRepository};

/// Reset tokens are this many random bytes, hex-encoded.
const RESET_TOKEN_BYTES: usize = 20;

/// Command to request a password reset for an email address.
#[derive(Debug, Clone)]
pub struct RequestResetCommand {
    pub email: String,
}

/// Result of a reset request.
///
/// `delivered` is false when token persistence succeeded but the email could
/// not be sent; the token stays valid either way.
#[derive(Debug, Clone)]
pub struct RequestResetResult {
    pub email: String,
    pub delivered: bool,
}

/// Handler for password-reset requests.
pub struct RequestResetHandler {
    users: Arc<dyn UserRepository>,
    mailer: Arc<dyn Mailer>,
    frontend_url: String,
}

impl RequestResetHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        mailer: Arc<dyn Mailer>,
        frontend_url: impl Into<String>,
    ) -> Self {
        Self {
            users,
            mailer,
            frontend_url: frontend_url.into(),
        }
    }

    pub async fn handle(&self, cmd: RequestResetCommand) -> Result<RequestResetResult, AccountError> {
        // 1. The account must exist
        let email = normalize_email(&cmd.email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AccountError::no_such_user(&email))?;

        // 2. Generate and persist the token before any delivery attempt
        let token = generate_reset_token();
        let expiry = Timestamp::now().plus_secs(RESET_TOKEN_TTL_SECS);
        self.users.set_reset_token(&user.id, &token, expiry).await?;

        // 3. Deliver the link. A delivery failure leaves the stored token in
        //    place; it is reported, not rolled back.
        let link = format!("{}/reset?resetToken={}", self.frontend_url, token);
        let delivered = match self
            .mailer
            .send(OutboundEmail {
                to: user.email.clone(),
                subject: "Password reset request".into(),
                html_body: format!(
                    "Your password reset link:\n\n<a href=\"{}\">Click me!</a>",
                    link
                ),
            })
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "Reset email delivery failed");
                false
            }
        };

        Ok(RequestResetResult {
            email: user.email,
            delivered,
        })
    }
}

fn generate_reset_token() -> String {
    let mut bytes = [0u8; RESET_TOKEN_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex_encode(&bytes)
}
