//! User accounts: signup/signin state, permissions, and the reset-token
//! lifecycle.

use serde::Serialize;

use crate::domain::foundation::{
    DomainError, ErrorCode, PermissionSet, Timestamp, UserId, ValidationError,
};

/// Reset tokens are valid for one hour from issuance.
pub const RESET_TOKEN_TTL_SECS: u64 = 3600;

/// A registered account.
///
/// `email` is always stored normalized (trimmed, lower-cased); `password_hash`
/// is an opaque PHC string produced by the credential hasher. The reset-token
/// pair is only ever written by the password-reset orchestrator and cleared
/// atomically when a token is consumed.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub permissions: PermissionSet,
    #[serde(skip_serializing)]
    pub reset_token: Option<String>,
    #[serde(skip_serializing)]
    pub reset_token_expiry: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Data required to create an account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub permissions: PermissionSet,
}

/// Normalizes an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validates a raw email address and returns it normalized.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let normalized = normalize_email(email);
    if normalized.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    if !normalized.contains('@') {
        return Err(ValidationError::invalid_format("email", "missing @ symbol"));
    }
    Ok(normalized)
}

/// Account-flow errors (signup, signin, password reset, user admin).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// No account exists for the given email.
    NoSuchUser(String),

    /// An account already exists for the given email.
    EmailTaken(String),

    /// Signin password did not match the stored credential.
    InvalidCredentials,

    /// The two supplied passwords differ.
    PasswordMismatch,

    /// No reset token was supplied with the request.
    MissingToken,

    /// The supplied reset token matched no account within the valid window.
    InvalidOrExpiredToken,

    /// Malformed input (bad email, empty permission set, ...).
    Validation(String),

    /// Persistence or credential-service failure.
    Infrastructure(String),
}

impl AccountError {
    pub fn no_such_user(email: impl Into<String>) -> Self {
        AccountError::NoSuchUser(email.into())
    }

    pub fn email_taken(email: impl Into<String>) -> Self {
        AccountError::EmailTaken(email.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AccountError::Validation(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccountError::Infrastructure(message.into())
    }
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountError::NoSuchUser(email) => write!(f, "No user with email {}", email),
            AccountError::EmailTaken(email) => {
                write!(f, "An account already exists for {}", email)
            }
            AccountError::InvalidCredentials => write!(f, "Invalid password"),
            AccountError::PasswordMismatch => write!(f, "Passwords do not match"),
            AccountError::MissingToken => write!(f, "No reset token was provided"),
            AccountError::InvalidOrExpiredToken => write!(f, "Token is invalid or expired"),
            AccountError::Validation(msg) => write!(f, "{}", msg),
            AccountError::Infrastructure(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AccountError {}

impl From<ValidationError> for AccountError {
    fn from(err: ValidationError) -> Self {
        AccountError::Validation(err.to_string())
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => AccountError::Validation(err.message),
            _ => AccountError::Infrastructure(err.message),
        }
    }
}

impl From<AccountError> for DomainError {
    fn from(err: AccountError) -> Self {
        let code = match &err {
            AccountError::NoSuchUser(_) => ErrorCode::NotFound,
            AccountError::EmailTaken(_) => ErrorCode::ValidationFailed,
            AccountError::InvalidCredentials => ErrorCode::ValidationFailed,
            AccountError::PasswordMismatch => ErrorCode::ValidationFailed,
            AccountError::MissingToken => ErrorCode::ValidationFailed,
            AccountError::InvalidOrExpiredToken => ErrorCode::ValidationFailed,
            AccountError::Validation(_) => ErrorCode::ValidationFailed,
            AccountError::Infrastructure(_) => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}
