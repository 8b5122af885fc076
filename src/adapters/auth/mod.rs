//! Credential-service adapters: session tokens and password hashing.

mod argon2_hasher;
mod jwt_sessions;

pub use argon2_hasher::Argon2CredentialHasher;
pub use jwt_sessions::JwtSessionTokens;
