//! Gallery albums and items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

pub const DEFAULT_ALBUM_TYPE: &str = "photo";
pub const DEFAULT_ITEM_TYPE: &str = "image";

/// Gallery album row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryAlbum {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    #[serde(rename = "type")]
    pub album_type: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GalleryAlbum {
    pub fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            cover_image: row.try_get("cover_image")?,
            album_type: row.try_get("type")?,
            display_order: row.try_get("display_order")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// Public album view with its items inlined
#[derive(Debug, Serialize)]
pub struct GalleryAlbumWithItems {
    #[serde(flatten)]
    pub album: GalleryAlbum,
    pub items: serde_json::Value,
}

impl GalleryAlbumWithItems {
    pub fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            album: GalleryAlbum::from_row(row)?,
            items: row.try_get("items")?,
        })
    }
}

/// Admin listing entry
#[derive(Debug, Serialize)]
pub struct GalleryAlbumSummary {
    #[serde(flatten)]
    pub album: GalleryAlbum,
    pub item_count: i64,
}

impl GalleryAlbumSummary {
    pub fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            album: GalleryAlbum::from_row(row)?,
            item_count: row.try_get("item_count")?,
        })
    }
}

/// Gallery item row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryItem {
    pub id: i32,
    pub album_id: i32,
    #[serde(rename = "type")]
    pub item_type: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub display_order: i32,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl GalleryItem {
    pub fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            album_id: row.try_get("album_id")?,
            item_type: row.try_get("type")?,
            url: row.try_get("url")?,
            thumbnail_url: row.try_get("thumbnail_url")?,
            caption: row.try_get("caption")?,
            display_order: row.try_get("display_order")?,
            width: row.try_get("width")?,
            height: row.try_get("height")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Query string for `GET /api/gallery`
#[derive(Debug, Default, Deserialize)]
pub struct ListAlbumsQuery {
    #[serde(rename = "type")]
    pub album_type: Option<String>,
}

/// Body of `POST /api/gallery`
#[derive(Debug, Deserialize)]
pub struct CreateAlbumRequest {
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    #[serde(rename = "type")]
    pub album_type: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl CreateAlbumRequest {
    pub fn album_type(&self) -> &str {
        self.album_type.as_deref().unwrap_or(DEFAULT_ALBUM_TYPE)
    }

    pub fn display_order(&self) -> i32 {
        self.display_order.unwrap_or(0)
    }

    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}

/// Body of `PUT /api/admin/gallery/{id}`; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAlbumRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    #[serde(rename = "type")]
    pub album_type: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Body of `POST /api/admin/gallery/{id}/items`
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub url: String,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub display_order: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl CreateItemRequest {
    pub fn item_type(&self) -> &str {
        self.item_type.as_deref().unwrap_or(DEFAULT_ITEM_TYPE)
    }

    pub fn display_order(&self) -> i32 {
        self.display_order.unwrap_or(0)
    }
}

/// Body of `PUT /api/admin/gallery/{id}/items/{item_id}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub display_order: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_item_request_defaults() {
        let req: CreateItemRequest = serde_json::from_value(json!({ "url": "x.png" })).unwrap();
        assert_eq!(req.url, "x.png");
        assert_eq!(req.item_type(), "image");
        assert_eq!(req.display_order(), 0);
        assert_eq!(req.caption, None);
    }

    #[test]
    fn test_item_request_explicit_values() {
        let req: CreateItemRequest = serde_json::from_value(json!({
            "url": "clip.mp4",
            "type": "video",
            "display_order": 4,
            "width": 1920,
            "height": 1080
        }))
        .unwrap();
        assert_eq!(req.item_type(), "video");
        assert_eq!(req.display_order(), 4);
        assert_eq!(req.width, Some(1920));
    }

    #[test]
    fn test_album_request_defaults() {
        let req: CreateAlbumRequest =
            serde_json::from_value(json!({ "title": "Summer Cup 2024" })).unwrap();
        assert_eq!(req.album_type(), "photo");
        assert_eq!(req.display_order(), 0);
        assert!(req.is_active());
    }

    #[test]
    fn test_album_serializes_type_field() {
        let now = Utc::now();
        let album = GalleryAlbum {
            id: 7,
            title: "Store opening".to_string(),
            description: None,
            cover_image: Some("cover.jpg".to_string()),
            album_type: "photo".to_string(),
            display_order: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(GalleryAlbumSummary {
            album,
            item_count: 3,
        })
        .unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["type"], "photo");
        assert_eq!(value["item_count"], 3);
        assert!(value.get("album_type").is_none());
        assert!(value.get("album").is_none());
    }

    #[test]
    fn test_list_query_type_filter() {
        let query: ListAlbumsQuery = serde_json::from_value(json!({ "type": "video" })).unwrap();
        assert_eq!(query.album_type.as_deref(), Some("video"));
    }
}
