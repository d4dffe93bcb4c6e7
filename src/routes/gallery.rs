//! Public gallery route handlers

use crate::db::queries::{GET_ACTIVE_ALBUM_WITH_ITEMS, INSERT_ALBUM, LIST_ACTIVE_ALBUMS};
use crate::error::ApiResult;
use crate::models::{CreateAlbumRequest, GalleryAlbum, GalleryAlbumWithItems, ListAlbumsQuery};
use crate::state::SharedState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, info};

/// GET /api/gallery
pub async fn list_albums(
    State(state): State<SharedState>,
    Query(params): Query<ListAlbumsQuery>,
) -> ApiResult<Json<Vec<GalleryAlbum>>> {
    debug!("Listing active gallery albums (type: {:?})", params.album_type);

    // No type filter binds NULL and matches every album
    let result = state
        .db
        .query(LIST_ACTIVE_ALBUMS, &[&params.album_type])
        .await?;

    // Map rows to albums
    let albums = result
        .rows
        .iter()
        .map(GalleryAlbum::from_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(albums))
}

/// POST /api/gallery
pub async fn create_album(
    State(state): State<SharedState>,
    Json(payload): Json<CreateAlbumRequest>,
) -> ApiResult<Json<Option<GalleryAlbum>>> {
    // Fill in defaults for omitted fields
    let album_type = payload.album_type();
    let display_order = payload.display_order();
    let is_active = payload.is_active();

    let result = state
        .db
        .query(
            INSERT_ALBUM,
            &[
                &payload.title,
                &payload.description,
                &payload.cover_image,
                &album_type,
                &display_order,
                &is_active,
            ],
        )
        .await?;

    let album = result.first().map(GalleryAlbum::from_row).transpose()?;
    if let Some(album) = &album {
        info!("Gallery album created: {} (id: {})", album.title, album.id);
    }

    Ok(Json(album))
}

/// GET /api/gallery/{id}
///
/// Inactive or unknown albums answer `null`.
pub async fn get_album(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Option<GalleryAlbumWithItems>>> {
    debug!("Getting gallery album: {}", id);

    // Items are aggregated into the same row
    let result = state.db.query(GET_ACTIVE_ALBUM_WITH_ITEMS, &[&id]).await?;
    let album = result
        .first()
        .map(GalleryAlbumWithItems::from_row)
        .transpose()?;

    Ok(Json(album))
}
