//! Request/response DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::{Item, ItemUpdate, NewItem};
use crate::domain::foundation::{ItemId, Timestamp};

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub image: Option<String>,
    pub large_image: Option<String>,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        NewItem {
            title: req.title,
            description: req.description,
            price_cents: req.price_cents,
            image: req.image,
            large_image: req.large_image,
            category_id: req.category_id,
            subcategory_id: req.subcategory_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub image: Option<String>,
    pub large_image: Option<String>,
}

impl From<UpdateItemRequest> for ItemUpdate {
    fn from(req: UpdateItemRequest) -> Self {
        ItemUpdate {
            title: req.title,
            description: req.description,
            price_cents: req.price_cents,
            image: req.image,
            large_image: req.large_image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
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

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            price_cents: item.price_cents,
            image: item.image,
            large_image: item.large_image,
            category_id: item.category_id,
            subcategory_id: item.subcategory_id,
            created_at: item.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_maps_to_new_item() {
        let json = r#"{"title":"Mug","price_cents":900}"#;
        let req: CreateItemRequest = serde_json::from_str(json).unwrap();
        let item: NewItem = req.into();
        assert_eq!(item.title, "Mug");
        assert_eq!(item.price_cents, 900);
        assert_eq!(item.description, "");
    }

    #[test]
    fn update_request_keeps_absent_fields_none() {
        let json = r#"{"price_cents":800}"#;
        let req: UpdateItemRequest = serde_json::from_str(json).unwrap();
        let update: ItemUpdate = req.into();
        assert_eq!(update.price_cents, Some(800));
        assert!(update.title.is_none());
    }
}
