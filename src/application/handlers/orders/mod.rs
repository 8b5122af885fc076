//! Order queries: single read, own listing, admin listing.

mod get_order;
mod list_all_orders;
mod list_orders;

pub use get_order::{GetOrderHandler, GetOrderQuery};
pub use list_all_orders::ListAllOrdersHandler;
pub use list_orders::ListOrdersHandler;
