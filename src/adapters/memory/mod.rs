//! In-memory port implementations.
//!
//! Used by handler unit tests and the integration tests; also handy for
//! local development without a database. Each repository keeps its rows in a
//! `Mutex<Vec<_>>` and supports an induced-failure mode for error-path
//! tests.

mod cart_repository;
mod item_repository;
mod order_repository;
mod user_repository;

pub use cart_repository::InMemoryCartRepository;
pub use item_repository::InMemoryItemRepository;
pub use order_repository::InMemoryOrderRepository;
pub use user_repository::InMemoryUserRepository;
