//! Command and query handlers, one per exposed operation.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
