//! Resend mailer adapter.
//!
//! Implements the `Mailer` port with a JSON POST to the Resend API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::EmailConfig;
use crate::ports::{Mailer, MailerError, OutboundEmail};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// HTTP mailer backed by Resend.
pub struct ResendMailer {
    api_key: SecretString,
    from_header: String,
    api_url: String,
    http_client: reqwest::Client,
}

impl ResendMailer {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            api_key: SecretString::new(config.resend_api_key.clone()),
            from_header: config.from_header(),
            api_url: RESEND_API_URL.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Set a custom API URL (for testing).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailerError> {
        let body = SendRequest {
            from: &self.from_header,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html_body,
        };

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected(format!("{}: {}", status, detail)));
        }

        tracing::debug!(to = %email.to, subject = %email.subject, "Email dispatched");
        Ok(())
    }
}
