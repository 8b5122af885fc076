//! PostgreSQL implementation of OrderRepository.
//!
//! Order creation writes the order row and all of its lines inside one
//! transaction; a half-written order is never visible.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, OrderId, OrderItemId, Timestamp, UserId};
use crate::domain::order::{NewOrder, Order, OrderItem};
use crate::ports::OrderRepository;

use super::db_error;

/// PostgreSQL implementation of the OrderRepository port.
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_lines(
        &self,
        order_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<OrderItem>>, DomainError> {
        let rows: Vec<OrderItemRow> = sqlx::query_as(
            r#"
            SELECT id, order_id, title, description, price_cents, image, large_image, quantity
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load order lines", e))?;

        let mut grouped: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
        for row in rows {
            grouped.entry(row.order_id).or_default().push(row.into());
        }
        Ok(grouped)
    }
}

/// Database row representation of an order.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    user_id: Uuid,
    total_cents: i64,
    charge_id: String,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Order {
        Order {
            id: OrderId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            total_cents: self.total_cents,
            charge_id: self.charge_id,
            items,
            created_at: Timestamp::from_datetime(self.created_at),
        }
    }
}

/// Database row representation of an order line.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: Uuid,
    order_id: Uuid,
    title: String,
    description: String,
    price_cents: i64,
    image: Option<String>,
    large_image: Option<String>,
    quantity: i32,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        OrderItem {
            id: OrderItemId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            price_cents: row.price_cents,
            image: row.image,
            large_image: row.large_image,
            quantity: row.quantity.max(0) as u32,
        }
    }
}

const ORDER_COLUMNS: &str = "id, user_id, total_cents, charge_id, created_at";

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to open transaction", e))?;

        let order_row: OrderRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO orders (id, user_id, total_cents, charge_id, created_at)
            VALUES ($1, $2, $3, $4, now())
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(order.user_id.as_uuid())
        .bind(order.total_cents)
        .bind(&order.charge_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to create order", e))?;

        for item in &order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items
                    (id, order_id, title, description, price_cents, image, large_image, quantity)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(item.id.as_uuid())
            .bind(order_row.id)
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.price_cents)
            .bind(&item.image)
            .bind(&item.large_image)
            .bind(item.quantity as i32)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to create order line", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit order", e))?;

        Ok(order_row.into_order(order.items))
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let row: Option<OrderRow> =
            sqlx::query_as(&format!("SELECT {} FROM orders WHERE id = $1", ORDER_COLUMNS))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("Failed to load order", e))?;

        match row {
            Some(row) => {
                let mut lines = self.load_lines(&[row.id]).await?;
                let items = lines.remove(&row.id).unwrap_or_default();
                Ok(Some(row.into_order(items)))
            }
            None => Ok(None),
        }
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError> {
        let rows: Vec<OrderRow> = sqlx::query_as(&format!(
            "SELECT {} FROM orders WHERE user_id = $1 ORDER BY created_at DESC",
            ORDER_COLUMNS
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list orders", e))?;

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut lines = self.load_lines(&ids).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let items = lines.remove(&row.id).unwrap_or_default();
                row.into_order(items)
            })
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        let rows: Vec<OrderRow> = sqlx::query_as(&format!(
            "SELECT {} FROM orders ORDER BY created_at DESC",
            ORDER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list all orders", e))?;

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut lines = self.load_lines(&ids).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let items = lines.remove(&row.id).unwrap_or_default();
                row.into_order(items)
            })
            .collect())
    }
}
