//! PostgreSQL implementations of the persistence ports.

mod cart_repository;
mod item_repository;
mod order_repository;
mod user_repository;

pub use cart_repository::PostgresCartRepository;
pub use item_repository::PostgresItemRepository;
pub use order_repository::PostgresOrderRepository;
pub use user_repository::PostgresUserRepository;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Maps an sqlx error to the domain taxonomy.
pub(crate) fn db_error(context: &str, err: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
}
