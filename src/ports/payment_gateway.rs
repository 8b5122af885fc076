//! Payment gateway port for one-shot charge capture.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for the external payment processor.
///
/// A charge either captures in full or fails; there is no partial state the
/// core needs to model.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Captures a charge for `amount_cents` against an opaque source token.
    async fn charge(&self, request: ChargeRequest) -> Result<Charge, PaymentError>;
}

/// A charge request in integer minor-currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    pub amount_cents: i64,
    pub currency: String,

    /// Opaque payment-source token supplied by the client.
    pub source: String,
}

/// A captured charge as reported by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charge {
    /// Gateway's charge identifier.
    pub id: String,

    /// Settled amount in minor-currency units.
    pub amount_cents: i64,
}

/// Errors from charge capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentError {
    pub code: PaymentErrorCode,
    pub message: String,

    /// Gateway's own error code, when it sent one.
    pub provider_code: Option<String>,
}

impl PaymentError {
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
        }
    }

    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::CardDeclined, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }

    /// True when the gateway rejected the charge itself (as opposed to the
    /// call failing to complete).
    pub fn is_declined(&self) -> bool {
        matches!(
            self.code,
            PaymentErrorCode::CardDeclined | PaymentErrorCode::InsufficientFunds
        )
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Card was declined.
    CardDeclined,

    /// Insufficient funds.
    InsufficientFunds,

    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Provider API error.
    ProviderError,

    /// Unknown error.
    Unknown,
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::CardDeclined => "card_declined",
            PaymentErrorCode::InsufficientFunds => "insufficient_funds",
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::ProviderError => "provider_error",
            PaymentErrorCode::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn declined_errors_are_flagged() {
        assert!(PaymentError::declined("no").is_declined());
        assert!(PaymentError::new(PaymentErrorCode::InsufficientFunds, "no").is_declined());
        assert!(!PaymentError::network("timeout").is_declined());
    }

    #[test]
    fn payment_error_display_includes_code() {
        let err = PaymentError::declined("Your card was declined");
        assert!(err.to_string().contains("card_declined"));
        assert!(err.to_string().contains("Your card was declined"));
    }
}
