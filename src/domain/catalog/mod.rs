//! Catalog items. Mutation is admin-gated; browsing is out of scope here.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::foundation::{ItemId, Timestamp, ValidationError};

/// A sellable catalog entry.
///
/// `price_cents` is integer minor-currency units; no floating point anywhere
/// in money handling.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub image: Option<String>,
    pub large_image: Option<String>,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub created_at: Timestamp,
}

/// Data required to create a catalog item.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub image: Option<String>,
    pub large_image: Option<String>,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
}

impl NewItem {
    /// Validates invariants that hold for every catalog item.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if self.price_cents < 0 {
            return Err(ValidationError::invalid_format(
                "price_cents",
                "price cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Partial update for an item; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub image: Option<String>,
    pub large_image: Option<String>,
}

impl ItemUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(ValidationError::empty_field("title"));
            }
        }
        if let Some(price) = self.price_cents {
            if price < 0 {
                return Err(ValidationError::invalid_format(
                    "price_cents",
                    "price cannot be negative",
                ));
            }
        }
        Ok(())
    }

    /// Applies the update to an existing item.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(price) = self.price_cents {
            item.price_cents = price;
        }
        if let Some(image) = &self.image {
            item.image = Some(image.clone());
        }
        if let Some(large_image) = &self.large_image {
            item.large_image = Some(large_image.clone());
        }
    }
}
