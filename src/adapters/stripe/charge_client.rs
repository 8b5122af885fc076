//! Stripe charge capture over the Charges API.
//!
//! Implements the `PaymentGateway` port with a single form-encoded POST to
//! `/v1/charges`. Card declines come back as structured errors and map to
//! `CardDeclined`; transport problems map to `NetworkError`.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::ports::{Charge, ChargeRequest, PaymentError, PaymentErrorCode, PaymentGateway};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for the Stripe API.
    api_base_url: String,
}

impl StripeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe implementation of the `PaymentGateway` port.
pub struct StripeChargeClient {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeChargeClient {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

/// Successful charge response body (the fields we read).
#[derive(Debug, Deserialize)]
struct StripeCharge {
    id: String,
    amount: i64,
}

/// Error envelope returned by the Charges API.
#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeApiError,
}

#[derive(Debug, Deserialize)]
struct StripeApiError {
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
    decline_code: Option<String>,
    message: Option<String>,
}

fn map_api_error(err: StripeApiError) -> PaymentError {
    let message = err
        .message
        .unwrap_or_else(|| "Charge was rejected".to_string());

    let code = match (err.error_type.as_deref(), err.code.as_deref()) {
        (Some("card_error"), Some("card_declined")) => {
            if err.decline_code.as_deref() == Some("insufficient_funds") {
                PaymentErrorCode::InsufficientFunds
            } else {
                PaymentErrorCode::CardDeclined
            }
        }
        (Some("card_error"), _) => PaymentErrorCode::CardDeclined,
        (Some("authentication_error"), _) => PaymentErrorCode::AuthenticationError,
        (Some("api_error"), _) => PaymentErrorCode::ProviderError,
        _ => PaymentErrorCode::Unknown,
    };

    let mut mapped = PaymentError::new(code, message);
    if let Some(provider_code) = err.decline_code.or(err.code) {
        mapped = mapped.with_provider_code(provider_code);
    }
    mapped
}

#[async_trait]
impl PaymentGateway for StripeChargeClient {
    async fn charge(&self, request: ChargeRequest) -> Result<Charge, PaymentError> {
        let url = format!("{}/v1/charges", self.config.api_base_url);
        let amount = request.amount_cents.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("currency", request.currency.as_str()),
            ("source", request.source.as_str()),
        ];

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.config.api_key.expose_secret())
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentError::network(format!("Stripe request failed: {}", e)))?;

        if response.status().is_success() {
            let charge: StripeCharge = response.json().await.map_err(|e| {
                PaymentError::provider(format!("Malformed charge response: {}", e))
            })?;
            tracing::info!(charge_id = %charge.id, amount = charge.amount, "Charge captured");
            return Ok(Charge {
                id: charge.id,
                amount_cents: charge.amount,
            });
        }

        let status = response.status();
        match response.json::<StripeErrorEnvelope>().await {
            Ok(envelope) => {
                let err = map_api_error(envelope.error);
                tracing::warn!(code = %err.code, status = %status, "Charge rejected");
                Err(err)
            }
            Err(_) => Err(PaymentError::provider(format!(
                "Stripe returned {} with unreadable body",
                status
            ))),
        }
    }
}
