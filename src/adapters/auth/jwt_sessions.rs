//! JWT implementation of the `SessionTokens` port.
//!
//! Tokens carry the user id and issuance time, HS256-signed with the
//! process-wide session secret. No expiry claim is embedded; session
//! lifetime is governed by the cookie.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, Timestamp, UserId};
use crate::ports::SessionTokens;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id.
    sub: String,

    /// Issued-at, Unix seconds.
    iat: u64,
}

/// HS256-signed session tokens.
pub struct JwtSessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtSessionTokens {
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
        }
    }
}

impl SessionTokens for JwtSessionTokens {
    fn issue(&self, user_id: &UserId) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: Timestamp::now().as_unix_secs(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::service_unavailable(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no exp claim; the cookie bounds the session lifetime.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::InvalidToken)?;

        data.claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> JwtSessionTokens {
        JwtSessionTokens::new(&SecretString::new("test-secret".into()))
    }

    #[test]
    fn issued_token_verifies_to_same_user() {
        let tokens = tokens();
        let user_id = UserId::new();

        let token = tokens.issue(&user_id).unwrap();
        let verified = tokens.verify(&token).unwrap();
        assert_eq!(verified, user_id);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let user_id = UserId::new();
        let token = JwtSessionTokens::new(&SecretString::new("secret-a".into()))
            .issue(&user_id)
            .unwrap();

        let result = JwtSessionTokens::new(&SecretString::new("secret-b".into())).verify(&token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let result = tokens().verify("not-a-jwt");
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn garbage_subject_is_rejected() {
        // Forge a token with a non-UUID subject using the same secret.
        let claims = Claims {
            sub: "not-a-uuid".into(),
            iat: 0,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let result = tokens().verify(&token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
