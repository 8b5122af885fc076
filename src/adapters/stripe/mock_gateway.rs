//! Mock payment gateway for tests and gateway-less development.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{Charge, ChargeRequest, PaymentError, PaymentGateway};

/// Behavior of the mock on the next charge.
enum Mode {
    /// Capture every charge, echoing the requested amount.
    Capture,

    /// Reject every charge with the given error.
    Reject(PaymentError),
}

/// Records every charge request and either captures or rejects them.
pub struct MockPaymentGateway {
    mode: Mutex<Mode>,
    requests: Mutex<Vec<ChargeRequest>>,
    counter: AtomicU64,
}

impl MockPaymentGateway {
    /// A gateway that captures everything.
    pub fn capturing() -> Self {
        Self {
            mode: Mutex::new(Mode::Capture),
            requests: Mutex::new(Vec::new()),
            counter: AtomicU64::new(0),
        }
    }

    /// A gateway that rejects everything with the given error.
    pub fn rejecting(error: PaymentError) -> Self {
        Self {
            mode: Mutex::new(Mode::Reject(error)),
            requests: Mutex::new(Vec::new()),
            counter: AtomicU64::new(0),
        }
    }

    /// Charge requests seen so far.
    pub fn requests(&self) -> Vec<ChargeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(&self, request: ChargeRequest) -> Result<Charge, PaymentError> {
        self.requests.lock().unwrap().push(request.clone());
        match &*self.mode.lock().unwrap() {
            Mode::Capture => {
                let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
                Ok(Charge {
                    id: format!("ch_mock_{}", n),
                    amount_cents: request.amount_cents,
                })
            }
            Mode::Reject(error) => Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn capturing_gateway_echoes_amount() {
        let gateway = MockPaymentGateway::capturing();
        let charge = gateway
            .charge(ChargeRequest {
                amount_cents: 2200,
                currency: "usd".into(),
                source: "tok_visa".into(),
            })
            .await
            .unwrap();

        assert_eq!(charge.amount_cents, 2200);
        assert!(charge.id.starts_with("ch_mock_"));
        assert_eq!(gateway.requests().len(), 1);
    }

    #[tokio::test]
    async fn rejecting_gateway_returns_configured_error() {
        let gateway = MockPaymentGateway::rejecting(PaymentError::declined("no"));
        let err = gateway
            .charge(ChargeRequest {
                amount_cents: 100,
                currency: "usd".into(),
                source: "tok_chargeDeclined".into(),
            })
            .await
            .unwrap_err();

        assert!(err.is_declined());
        assert_eq!(gateway.requests().len(), 1);
    }
}
