//! Cart mutations. Owner-scoped.

mod add_to_cart;
mod remove_from_cart;

pub use add_to_cart::{AddToCartCommand, AddToCartHandler};
pub use remove_from_cart::{RemoveFromCartCommand, RemoveFromCartHandler};
