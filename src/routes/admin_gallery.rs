//! Admin gallery route handlers
//!
//! Unlike the public routes these see inactive albums too.

use crate::db::queries::{
    DELETE_ALBUM, DELETE_ITEM, GET_ALBUM, INSERT_ITEM, LIST_ALBUM_ITEMS, LIST_ALL_ALBUMS,
    UPDATE_ALBUM, UPDATE_ITEM,
};
use crate::error::ApiResult;
use crate::models::{
    CreateItemRequest, GalleryAlbum, GalleryAlbumSummary, GalleryItem, UpdateAlbumRequest,
    UpdateItemRequest,
};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info};

/// GET /api/admin/gallery
pub async fn list_albums(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<GalleryAlbumSummary>>> {
    // Inactive albums included, each with its item count
    let result = state.db.query(LIST_ALL_ALBUMS, &[]).await?;

    let albums = result
        .rows
        .iter()
        .map(GalleryAlbumSummary::from_row)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Listed {} gallery albums", albums.len());
    Ok(Json(albums))
}

/// GET /api/admin/gallery/{id}
pub async fn get_album(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Option<GalleryAlbum>>> {
    let result = state.db.query(GET_ALBUM, &[&id]).await?;

    // Unknown id answers null
    Ok(Json(result.first().map(GalleryAlbum::from_row).transpose()?))
}

/// PUT /api/admin/gallery/{id}
pub async fn update_album(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAlbumRequest>,
) -> ApiResult<Json<Option<GalleryAlbum>>> {
    debug!("Updating gallery album: {}", id);

    // NULL parameters keep the stored value
    let result = state
        .db
        .query(
            UPDATE_ALBUM,
            &[
                &id,
                &payload.title,
                &payload.description,
                &payload.cover_image,
                &payload.album_type,
                &payload.display_order,
                &payload.is_active,
            ],
        )
        .await?;

    info!("Gallery album {} updated ({} row)", id, result.row_count);
    Ok(Json(result.first().map(GalleryAlbum::from_row).transpose()?))
}

/// DELETE /api/admin/gallery/{id}
pub async fn delete_album(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Option<GalleryAlbum>>> {
    // Items are removed by the foreign key cascade
    let result = state.db.query(DELETE_ALBUM, &[&id]).await?;

    info!("Gallery album {} deleted ({} row)", id, result.row_count);
    Ok(Json(result.first().map(GalleryAlbum::from_row).transpose()?))
}

/// GET /api/admin/gallery/{id}/items
pub async fn list_items(
    State(state): State<SharedState>,
    Path(album_id): Path<i32>,
) -> ApiResult<Json<Vec<GalleryItem>>> {
    let result = state.db.query(LIST_ALBUM_ITEMS, &[&album_id]).await?;

    let items = result
        .rows
        .iter()
        .map(GalleryItem::from_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(items))
}

/// POST /api/admin/gallery/{id}/items
pub async fn create_item(
    State(state): State<SharedState>,
    Path(album_id): Path<i32>,
    Json(payload): Json<CreateItemRequest>,
) -> ApiResult<Json<Option<GalleryItem>>> {
    // Defaults: type "image", display_order 0
    let item_type = payload.item_type();
    let display_order = payload.display_order();

    // A missing album fails the foreign key and surfaces as a 500
    let result = state
        .db
        .query(
            INSERT_ITEM,
            &[
                &album_id,
                &item_type,
                &payload.url,
                &payload.thumbnail_url,
                &payload.caption,
                &display_order,
                &payload.width,
                &payload.height,
            ],
        )
        .await?;

    let item = result.first().map(GalleryItem::from_row).transpose()?;
    if let Some(item) = &item {
        info!("Gallery item {} added to album {}", item.id, album_id);
    }

    Ok(Json(item))
}

/// PUT /api/admin/gallery/{id}/items/{item_id}
pub async fn update_item(
    State(state): State<SharedState>,
    Path((album_id, item_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateItemRequest>,
) -> ApiResult<Json<Option<GalleryItem>>> {
    // Scoped to the album so an item id from another album matches nothing
    let result = state
        .db
        .query(
            UPDATE_ITEM,
            &[
                &album_id,
                &item_id,
                &payload.item_type,
                &payload.url,
                &payload.thumbnail_url,
                &payload.caption,
                &payload.display_order,
                &payload.width,
                &payload.height,
            ],
        )
        .await?;

    info!("Gallery item {} in album {} updated ({} row)", item_id, album_id, result.row_count);
    Ok(Json(result.first().map(GalleryItem::from_row).transpose()?))
}

/// DELETE /api/admin/gallery/{id}/items/{item_id}
pub async fn delete_item(
    State(state): State<SharedState>,
    Path((album_id, item_id)): Path<(i32, i32)>,
) -> ApiResult<Json<Option<GalleryItem>>> {
    // Same album scoping as update
    let result = state.db.query(DELETE_ITEM, &[&album_id, &item_id]).await?;

    info!("Gallery item {} in album {} deleted ({} row)", item_id, album_id, result.row_count);
    Ok(Json(result.first().map(GalleryItem::from_row).transpose()?))
}
