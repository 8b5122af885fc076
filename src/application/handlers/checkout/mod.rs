//! Checkout: the cart-to-order conversion pipeline.

mod create_order;

pub use create_order::{CreateOrderCommand, CreateOrderHandler};
