//! CreateOrderHandler - Converts the requester's cart into a captured
//! charge, an immutable order, and an empty cart.
//!
//! Sequencing is load-bearing:
//!
//! 1. snapshot the cart (lines joined with item fields, ids captured);
//! 2. total the snapshot in integer cents;
//! 3. capture the charge - nothing is persisted before this point, so a
//!    gateway rejection leaves the store untouched;
//! 4. materialize the order from the snapshot;
//! 5. bulk-delete the snapshot's cart ids.
//!
//! A persistence failure after capture is a reconciliation case, not a
//! rollback case: the money moved. Those failures surface as
//! `CheckoutError::Inconsistent` with the charge id and are logged at error
//! level.
//!
//! Cart deletion uses the id set captured in step 1, never a re-query, so a
//! concurrent mutation between snapshot and cleanup cannot widen the delete.
//! Deleting an id that is already gone is a no-op, which makes the cleanup
//! idempotent; two checkouts racing over one cart can still double-charge,
//! and that residual risk is accepted rather than papered over here.

use std::sync::Arc;

use crate::application::authorization::require_identity;
use crate::domain::cart::cart_total_cents;
use crate::domain::foundation::Identity;
use crate::domain::order::{CheckoutError, NewOrder, Order, OrderItem};
use crate::ports::{CartRepository, ChargeRequest, OrderRepository, PaymentGateway};

/// Command to convert the requester's cart into an order.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Opaque payment-source token from the client.
    pub payment_source: String,
}

/// Handler for checkout.
pub struct CreateOrderHandler {
    cart: Arc<dyn CartRepository>,
    orders: Arc<dyn OrderRepository>,
    gateway: Arc<dyn PaymentGateway>,
    currency: String,
}

impl CreateOrderHandler {
    pub fn new(
        cart: Arc<dyn CartRepository>,
        orders: Arc<dyn OrderRepository>,
        gateway: Arc<dyn PaymentGateway>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            cart,
            orders,
            gateway,
            currency: currency.into(),
        }
    }

    pub async fn handle(
        &self,
        identity: Option<&Identity>,
        cmd: CreateOrderCommand,
    ) -> Result<Order, CheckoutError> {
        let identity = require_identity(identity).map_err(|_| CheckoutError::Unauthenticated)?;

        // 1. Snapshot the cart; the id set drives cleanup in step 5
        let entries = self
            .cart
            .load_cart(&identity.user_id)
            .await
            .map_err(|e| CheckoutError::infrastructure(e.message))?;

        // An empty cart never reaches the gateway; zero-amount charges are
        // not attempted.
        if entries.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let cart_item_ids: Vec<_> = entries.iter().map(|e| e.cart_item_id).collect();

        // 2. Total in integer minor units
        let amount_cents = cart_total_cents(&entries);

        // 3. Capture the charge. On rejection nothing has been written.
        let charge = self
            .gateway
            .charge(ChargeRequest {
                amount_cents,
                currency: self.currency.clone(),
                source: cmd.payment_source,
            })
            .await
            .map_err(|e| {
                if e.is_declined() {
                    CheckoutError::declined(e.to_string())
                } else {
                    CheckoutError::payment_failed(e.to_string())
                }
            })?;

        tracing::info!(
            user_id = %identity.user_id,
            charge_id = %charge.id,
            amount_cents = charge.amount_cents,
            "Charge captured, materializing order"
        );

        // 4. Freeze the cart lines into order lines and persist the order.
        //    The order's total is the gateway's settled amount.
        let items: Vec<OrderItem> = entries.iter().map(OrderItem::from_entry).collect();
        let order = match self
            .orders
            .create(NewOrder {
                user_id: identity.user_id,
                total_cents: charge.amount_cents,
                charge_id: charge.id.clone(),
                items,
            })
            .await
        {
            Ok(order) => order,
            Err(e) => {
                tracing::error!(
                    charge_id = %charge.id,
                    user_id = %identity.user_id,
                    error = %e,
                    "Charge captured but order creation failed; manual reconciliation required"
                );
                return Err(CheckoutError::inconsistent(charge.id, e.message));
            }
        };

        // 5. Clear the converted lines by the captured id set
        if let Err(e) = self.cart.delete_many(&cart_item_ids).await {
            tracing::error!(
                charge_id = %charge.id,
                order_id = %order.id,
                error = %e,
                "Order created but cart cleanup failed; manual reconciliation required"
            );
            return Err(CheckoutError::inconsistent(charge.id, e.message));
        }

        Ok(order)
    }
}
