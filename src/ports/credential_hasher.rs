//! Password hashing port.

use thiserror::Error;

/// Port for password hashing and verification.
///
/// Hashes are opaque PHC strings; the domain never inspects them.
pub trait CredentialHasher: Send + Sync {
    /// Hashes a plaintext password.
    fn hash(&self, password: &str) -> Result<String, CredentialError>;

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` for a well-formed hash that does not match;
    /// errors are reserved for malformed hashes or hasher failure.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError>;
}

/// Errors from the credential hasher.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),

    #[error("Stored credential is malformed: {0}")]
    MalformedHash(String),
}
