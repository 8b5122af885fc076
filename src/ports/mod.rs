//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Gateway
//!
//! - `UserRepository`, `ItemRepository`, `CartRepository`, `OrderRepository`
//!   - entity-shaped CRUD with filtered reads and bulk delete
//!
//! ## External services
//!
//! - `PaymentGateway` - single-shot charge capture
//! - `Mailer` - fire-and-forget templated email
//! - `CredentialHasher` - password hashing/verification
//! - `SessionTokens` - signed session token issuance/verification

mod cart_repository;
mod credential_hasher;
mod item_repository;
mod mailer;
mod order_repository;
mod payment_gateway;
mod session_tokens;
mod user_repository;

pub use cart_repository::CartRepository;
pub use credential_hasher::{CredentialError, CredentialHasher};
pub use item_repository::ItemRepository;
pub use mailer::{Mailer, MailerError, OutboundEmail};
pub use order_repository::OrderRepository;
pub use payment_gateway::{Charge, ChargeRequest, PaymentError, PaymentErrorCode, PaymentGateway};
pub use session_tokens::SessionTokens;
pub use user_repository::UserRepository;
