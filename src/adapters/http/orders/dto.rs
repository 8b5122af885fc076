//! Request/response DTOs for order endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrderId, OrderItemId, Timestamp, UserId};
use crate::domain::order::{Order, OrderItem};

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Opaque payment-source token produced by the payment widget.
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct OrderItemResponse {
    pub id: OrderItemId,
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub image: Option<String>,
    pub large_image: Option<String>,
    pub quantity: u32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            price_cents: item.price_cents,
            image: item.image,
            large_image: item.large_image,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_cents: i64,
    pub charge_id: String,
    pub items: Vec<OrderItemResponse>,
    pub created_at: Timestamp,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            total_cents: order.total_cents,
            charge_id: order.charge_id,
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at,
        }
    }
}
