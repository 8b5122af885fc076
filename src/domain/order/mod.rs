//! Orders and frozen order lines.
//!
//! An order is an immutable record of a completed checkout. Its lines are
//! full copies of the sellable item fields at capture time, so later catalog
//! edits never alter order history.

use serde::Serialize;

use crate::domain::cart::CartEntry;
use crate::domain::foundation::{
    DomainError, ErrorCode, OrderId, OrderItemId, OwnedByUser, Timestamp, UserId,
};

/// A frozen order line.
///
/// Carries no reference to the originating item or cart entry.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub image: Option<String>,
    pub large_image: Option<String>,
    pub quantity: u32,
}

impl OrderItem {
    /// Copies the sellable fields out of a cart entry.
    ///
    /// The item and cart-entry ids and any category relations are dropped
    /// here; only the snapshot survives.
    pub fn from_entry(entry: &CartEntry) -> Self {
        Self {
            id: OrderItemId::new(),
            title: entry.item.title.clone(),
            description: entry.item.description.clone(),
            price_cents: entry.item.price_cents,
            image: entry.item.image.clone(),
            large_image: entry.item.large_image.clone(),
            quantity: entry.quantity,
        }
    }

    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * i64::from(self.quantity)
    }
}

/// A completed checkout.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_cents: i64,
    pub charge_id: String,
    pub items: Vec<OrderItem>,
    pub created_at: Timestamp,
}

impl OwnedByUser for Order {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}

/// Data required to materialize an order after a captured charge.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub total_cents: i64,
    pub charge_id: String,
    pub items: Vec<OrderItem>,
}

/// Checkout-flow errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout requires a signed-in requester.
    Unauthenticated,

    /// The requester's cart had no entries; no charge was attempted.
    EmptyCart,

    /// The gateway rejected the charge. Nothing was persisted.
    PaymentDeclined { reason: String },

    /// The gateway could not be reached or answered malformed.
    PaymentFailed { reason: String },

    /// A charge was captured but order materialization or cart cleanup
    /// failed afterwards. Carries the charge id for reconciliation.
    Inconsistent { charge_id: String, reason: String },

    /// Persistence failure before any charge was attempted.
    Infrastructure(String),
}

impl CheckoutError {
    pub fn declined(reason: impl Into<String>) -> Self {
        CheckoutError::PaymentDeclined { reason: reason.into() }
    }

    pub fn payment_failed(reason: impl Into<String>) -> Self {
        CheckoutError::PaymentFailed { reason: reason.into() }
    }

    pub fn inconsistent(charge_id: impl Into<String>, reason: impl Into<String>) -> Self {
        CheckoutError::Inconsistent {
            charge_id: charge_id.into(),
            reason: reason.into(),
        }
    }

    pub fn infrastructure(reason: impl Into<String>) -> Self {
        CheckoutError::Infrastructure(reason.into())
    }
}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutError::Unauthenticated => {
                write!(f, "You must be signed in to complete the order")
            }
            CheckoutError::EmptyCart => write!(f, "Cart is empty"),
            CheckoutError::PaymentDeclined { reason } => {
                write!(f, "Payment declined: {}", reason)
            }
            CheckoutError::PaymentFailed { reason } => write!(f, "Payment failed: {}", reason),
            CheckoutError::Inconsistent { charge_id, reason } => write!(
                f,
                "Charge {} captured but checkout completion failed: {}",
                charge_id, reason
            ),
            CheckoutError::Infrastructure(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for CheckoutError {}

impl From<CheckoutError> for DomainError {
    fn from(err: CheckoutError) -> Self {
        match &err {
            CheckoutError::Unauthenticated => {
                DomainError::new(ErrorCode::Unauthenticated, err.to_string())
            }
            CheckoutError::EmptyCart => {
                DomainError::new(ErrorCode::ValidationFailed, err.to_string())
            }
            CheckoutError::PaymentDeclined { .. } => {
                DomainError::new(ErrorCode::PaymentDeclined, err.to_string())
            }
            CheckoutError::PaymentFailed { .. } => {
                DomainError::new(ErrorCode::PaymentFailed, err.to_string())
            }
            CheckoutError::Inconsistent { charge_id, .. } => {
                DomainError::new(ErrorCode::InconsistentState, err.to_string())
                    .with_detail("charge_id", charge_id.clone())
            }
            CheckoutError::Infrastructure(_) => {
                DomainError::new(ErrorCode::InternalError, err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::ItemSnapshot;
    use crate::domain::foundation::{CartItemId, ItemId};

    fn entry() -> CartEntry {
        CartEntry {
            cart_item_id: CartItemId::new(),
            quantity: 3,
            item: ItemSnapshot {
                item_id: ItemId::new(),
                title: "Lantern".into(),
                description: "Brass".into(),
                price_cents: 2500,
                image: Some("lantern.jpg".into()),
                large_image: None,
            },
        }
    }

    #[test]
    fn order_item_copies_sellable_fields() {
        let e = entry();
        let line = OrderItem::from_entry(&e);

        assert_eq!(line.title, "Lantern");
        assert_eq!(line.price_cents, 2500);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.image.as_deref(), Some("lantern.jpg"));
    }

    #[test]
    fn order_item_gets_its_own_identity() {
        let e = entry();
        let a = OrderItem::from_entry(&e);
        let b = OrderItem::from_entry(&e);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn order_item_serialization_carries_no_source_ids() {
        let e = entry();
        let line = OrderItem::from_entry(&e);
        let json = serde_json::to_value(&line).unwrap();

        assert!(json.get("item_id").is_none());
        assert!(json.get("cart_item_id").is_none());
    }

    #[test]
    fn inconsistent_error_keeps_charge_id_for_reconciliation() {
        let err: DomainError =
            CheckoutError::inconsistent("ch_42", "order insert failed").into();
        assert_eq!(err.code, ErrorCode::InconsistentState);
        assert_eq!(err.details.get("charge_id"), Some(&"ch_42".to_string()));
    }

    #[test]
    fn declined_error_maps_to_payment_declined() {
        let err: DomainError = CheckoutError::declined("card_declined").into();
        assert_eq!(err.code, ErrorCode::PaymentDeclined);
    }
}
