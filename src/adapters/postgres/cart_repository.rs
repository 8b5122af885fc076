//! PostgreSQL implementation of CartRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::cart::{CartEntry, CartItem, ItemSnapshot};
use crate::domain::foundation::{CartItemId, DomainError, ItemId, Timestamp, UserId};
use crate::ports::CartRepository;

use super::db_error;

/// PostgreSQL implementation of the CartRepository port.
pub struct PostgresCartRepository {
    pool: PgPool,
}

impl PostgresCartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a cart entry.
#[derive(Debug, sqlx::FromRow)]
struct CartItemRow {
    id: Uuid,
    user_id: Uuid,
    item_id: Uuid,
    quantity: i32,
    added_at: DateTime<Utc>,
}

impl From<CartItemRow> for CartItem {
    fn from(row: CartItemRow) -> Self {
        CartItem {
            id: CartItemId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            item_id: ItemId::from_uuid(row.item_id),
            quantity: row.quantity.max(0) as u32,
            added_at: Timestamp::from_datetime(row.added_at),
        }
    }
}

/// Joined cart line, one row per entry with its item snapshot.
#[derive(Debug, sqlx::FromRow)]
struct CartEntryRow {
    cart_item_id: Uuid,
    quantity: i32,
    item_id: Uuid,
    title: String,
    description: String,
    price_cents: i64,
    image: Option<String>,
    large_image: Option<String>,
}

impl From<CartEntryRow> for CartEntry {
    fn from(row: CartEntryRow) -> Self {
        CartEntry {
            cart_item_id: CartItemId::from_uuid(row.cart_item_id),
            quantity: row.quantity.max(0) as u32,
            item: ItemSnapshot {
                item_id: ItemId::from_uuid(row.item_id),
                title: row.title,
                description: row.description,
                price_cents: row.price_cents,
                image: row.image,
                large_image: row.large_image,
            },
        }
    }
}

const CART_COLUMNS: &str = "id, user_id, item_id, quantity, added_at";

#[async_trait]
impl CartRepository for PostgresCartRepository {
    async fn find_entry(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
    ) -> Result<Option<CartItem>, DomainError> {
        let row: Option<CartItemRow> = sqlx::query_as(&format!(
            "SELECT {} FROM cart_items WHERE user_id = $1 AND item_id = $2",
            CART_COLUMNS
        ))
        .bind(user_id.as_uuid())
        .bind(item_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find cart entry", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: &CartItemId) -> Result<Option<CartItem>, DomainError> {
        let row: Option<CartItemRow> =
            sqlx::query_as(&format!("SELECT {} FROM cart_items WHERE id = $1", CART_COLUMNS))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("Failed to load cart entry", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, user_id: &UserId, item_id: &ItemId) -> Result<CartItem, DomainError> {
        let row: CartItemRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO cart_items (id, user_id, item_id, quantity, added_at)
            VALUES ($1, $2, $3, 1, now())
            RETURNING {}
            "#,
            CART_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(user_id.as_uuid())
        .bind(item_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create cart entry", e))?;

        Ok(row.into())
    }

    async fn set_quantity(
        &self,
        id: &CartItemId,
        quantity: u32,
    ) -> Result<CartItem, DomainError> {
        let row: Option<CartItemRow> = sqlx::query_as(&format!(
            "UPDATE cart_items SET quantity = $2 WHERE id = $1 RETURNING {}",
            CART_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(quantity as i32)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update cart quantity", e))?;

        row.map(Into::into).ok_or_else(|| DomainError::not_found("Cart item"))
    }

    async fn load_cart(&self, user_id: &UserId) -> Result<Vec<CartEntry>, DomainError> {
        let rows: Vec<CartEntryRow> = sqlx::query_as(
            r#"
            SELECT ci.id AS cart_item_id, ci.quantity,
                   i.id AS item_id, i.title, i.description, i.price_cents,
                   i.image, i.large_image
            FROM cart_items ci
            JOIN items i ON i.id = ci.item_id
            WHERE ci.user_id = $1
            ORDER BY ci.added_at
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load cart", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: &CartItemId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete cart entry", e))?;
        Ok(())
    }

    async fn delete_many(&self, ids: &[CartItemId]) -> Result<u64, DomainError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let result = sqlx::query("DELETE FROM cart_items WHERE id = ANY($1)")
            .bind(&uuids)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to clear cart entries", e))?;

        Ok(result.rows_affected())
    }
}
