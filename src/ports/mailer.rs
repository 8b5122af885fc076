//! Outbound notification port.

use async_trait::async_trait;
use thiserror::Error;

/// A templated message to a single recipient.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Port for outbound email.
///
/// Fire-and-forget from the core's perspective: callers log failures but
/// never let them undo state that was already committed.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailerError>;
}

/// Errors from mail delivery.
#[derive(Debug, Clone, Error)]
pub enum MailerError {
    /// Could not reach the delivery service.
    #[error("Mail transport error: {0}")]
    Transport(String),

    /// The delivery service rejected the message.
    #[error("Mail rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailer_is_object_safe() {
        fn _accepts_dyn(_mailer: &dyn Mailer) {}
    }

    #[test]
    fn mailer_error_displays_reason() {
        let err = MailerError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "Mail transport error: connection refused");
    }
}
