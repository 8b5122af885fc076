//! Adapters - Implementations of the ports for real and test
//! infrastructure.

pub mod auth;
pub mod email;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod stripe;
