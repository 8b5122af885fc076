//! Outbound email adapters.

mod mock;
mod resend;

pub use mock::MockMailer;
pub use resend::ResendMailer;
