//! PostgreSQL implementation of ItemRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::catalog::{Item, ItemUpdate, NewItem};
use crate::domain::foundation::{DomainError, ItemId, Timestamp};
use crate::ports::ItemRepository;

use super::db_error;

/// PostgreSQL implementation of the ItemRepository port.
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a catalog item.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    title: String,
    description: String,
    price_cents: i64,
    image: Option<String>,
    large_image: Option<String>,
    category_id: Option<Uuid>,
    subcategory_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: ItemId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            price_cents: row.price_cents,
            image: row.image,
            large_image: row.large_image,
            category_id: row.category_id,
            subcategory_id: row.subcategory_id,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

const ITEM_COLUMNS: &str =
    "id, title, description, price_cents, image, large_image, category_id, subcategory_id, created_at";

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, item: NewItem) -> Result<Item, DomainError> {
        let row: ItemRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO items
                (id, title, description, price_cents, image, large_image,
                 category_id, subcategory_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, now())
            RETURNING {}
            "#,
            ITEM_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.price_cents)
        .bind(&item.image)
        .bind(&item.large_image)
        .bind(item.category_id)
        .bind(item.subcategory_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create item", e))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        let row: Option<ItemRow> =
            sqlx::query_as(&format!("SELECT {} FROM items WHERE id = $1", ITEM_COLUMNS))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("Failed to load item", e))?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, id: &ItemId, update: ItemUpdate) -> Result<Option<Item>, DomainError> {
        let row: Option<ItemRow> = sqlx::query_as(&format!(
            r#"
            UPDATE items SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                price_cents = COALESCE($4, price_cents),
                image = COALESCE($5, image),
                large_image = COALESCE($6, large_image)
            WHERE id = $1
            RETURNING {}
            "#,
            ITEM_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(update.title)
        .bind(update.description)
        .bind(update.price_cents)
        .bind(update.image)
        .bind(update.large_image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update item", e))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        let row: Option<ItemRow> = sqlx::query_as(&format!(
            "DELETE FROM items WHERE id = $1 RETURNING {}",
            ITEM_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to delete item", e))?;

        Ok(row.map(Into::into))
    }
}
