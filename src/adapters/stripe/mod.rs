//! Stripe payment gateway adapter.

mod charge_client;
mod mock_gateway;

pub use charge_client::{StripeChargeClient, StripeConfig};
pub use mock_gateway::MockPaymentGateway;
