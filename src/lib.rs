//! Cartwheel - E-commerce backend.
//!
//! Authenticated mutations and queries for catalog management, cart
//! manipulation, checkout, and account flows. The authorization policy,
//! checkout pipeline, and password-reset lifecycle live in `application`;
//! external collaborators are reached only through the contracts in `ports`.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
