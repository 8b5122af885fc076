//! Session configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Session cookies live just under a year; signin, signup and password
/// reset each re-issue the token, rolling the window forward.
const DEFAULT_COOKIE_MAX_AGE_SECS: u64 = 364 * 24 * 60 * 60;

/// Session configuration (token signing, cookie shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Process-wide token signing secret
    pub secret: SecretString,

    /// Cookie name carrying the session token
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Cookie lifetime in seconds
    #[serde(default = "default_cookie_max_age")]
    pub cookie_max_age_secs: u64,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("SESSION_SECRET"));
        }
        if self.secret.expose_secret().len() < 32 {
            return Err(ValidationError::SessionSecretTooShort);
        }
        if self.cookie_name.is_empty() {
            return Err(ValidationError::MissingRequired("SESSION_COOKIE_NAME"));
        }
        Ok(())
    }
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_cookie_max_age() -> u64 {
    DEFAULT_COOKIE_MAX_AGE_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> SessionConfig {
        SessionConfig {
            secret: SecretString::new(secret.to_string()),
            cookie_name: default_cookie_name(),
            cookie_max_age_secs: default_cookie_max_age(),
        }
    }

    #[test]
    fn accepts_long_secret() {
        assert!(config("0123456789abcdef0123456789abcdef").validate().is_ok());
    }

    #[test]
    fn rejects_short_secret() {
        assert!(matches!(
            config("short").validate(),
            Err(ValidationError::SessionSecretTooShort)
        ));
    }

    #[test]
    fn default_cookie_is_token_for_a_year() {
        let config = config("0123456789abcdef0123456789abcdef");
        assert_eq!(config.cookie_name, "token");
        assert_eq!(config.cookie_max_age_secs, 364 * 24 * 60 * 60);
    }
}
