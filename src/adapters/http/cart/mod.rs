//! Cart HTTP endpoints.

mod dto;
pub mod handlers;
mod routes;

pub use dto::*;
pub use routes::router;
