//! SQL statements issued by the route handlers
//!
//! One constant per handler. Every statement takes positional parameters only;
//! nothing is interpolated into the SQL text.
//!
//! Column lists are always spelled out. Statements are cached per pooled
//! connection, and a `*` result would change shape when a migration adds a
//! column, which Postgres rejects with "cached plan must not change result
//! type".

/// Columns selected for a gallery album, in `GalleryAlbum::from_row` order
macro_rules! album_columns {
    () => {
        "id, title, description, cover_image, type, display_order, is_active, created_at, updated_at"
    };
}

/// Columns selected for a gallery item
macro_rules! item_columns {
    () => {
        "id, album_id, type, url, thumbnail_url, caption, display_order, width, height, created_at"
    };
}

// ---------------------------------------------------------------------------
// Public gallery
// ---------------------------------------------------------------------------

/// Active albums, optionally filtered by type ($1 NULL = all types)
pub const LIST_ACTIVE_ALBUMS: &str = concat!(
    "SELECT ",
    album_columns!(),
    " FROM gallery_albums
     WHERE is_active = true
       AND ($1::text IS NULL OR type = $1)
     ORDER BY display_order ASC, created_at DESC"
);

/// Insert an album and return it
pub const INSERT_ALBUM: &str = concat!(
    "INSERT INTO gallery_albums (title, description, cover_image, type, display_order, is_active)
     VALUES ($1, $2, $3, $4, $5, $6)
     RETURNING ",
    album_columns!()
);

/// One active album with its items aggregated into a JSON array
pub const GET_ACTIVE_ALBUM_WITH_ITEMS: &str = concat!(
    "SELECT ",
    album_columns!(),
    ",
        COALESCE((
            SELECT json_agg(i ORDER BY i.display_order ASC, i.id ASC)
            FROM gallery_items i
            WHERE i.album_id = a.id
        ), '[]'::json) AS items
     FROM gallery_albums a
     WHERE a.id = $1 AND a.is_active = true"
);

// ---------------------------------------------------------------------------
// Admin gallery
// ---------------------------------------------------------------------------

/// Every album, active or not, with its item count
pub const LIST_ALL_ALBUMS: &str = concat!(
    "SELECT ",
    album_columns!(),
    ",
        (SELECT COUNT(*) FROM gallery_items i WHERE i.album_id = a.id) AS item_count
     FROM gallery_albums a
     ORDER BY display_order ASC, created_at DESC"
);

pub const GET_ALBUM: &str = concat!(
    "SELECT ",
    album_columns!(),
    " FROM gallery_albums WHERE id = $1"
);

/// Absent fields keep their current value
pub const UPDATE_ALBUM: &str = concat!(
    "UPDATE gallery_albums SET
        title = COALESCE($2, title),
        description = COALESCE($3, description),
        cover_image = COALESCE($4, cover_image),
        type = COALESCE($5, type),
        display_order = COALESCE($6, display_order),
        is_active = COALESCE($7, is_active),
        updated_at = NOW()
     WHERE id = $1
     RETURNING ",
    album_columns!()
);

/// Items go with the album through ON DELETE CASCADE
pub const DELETE_ALBUM: &str = concat!(
    "DELETE FROM gallery_albums WHERE id = $1 RETURNING ",
    album_columns!()
);

pub const LIST_ALBUM_ITEMS: &str = concat!(
    "SELECT ",
    item_columns!(),
    " FROM gallery_items
     WHERE album_id = $1
     ORDER BY display_order ASC, id ASC"
);

pub const INSERT_ITEM: &str = concat!(
    "INSERT INTO gallery_items (album_id, type, url, thumbnail_url, caption, display_order, width, height)
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
     RETURNING ",
    item_columns!()
);

pub const UPDATE_ITEM: &str = concat!(
    "UPDATE gallery_items SET
        type = COALESCE($3, type),
        url = COALESCE($4, url),
        thumbnail_url = COALESCE($5, thumbnail_url),
        caption = COALESCE($6, caption),
        display_order = COALESCE($7, display_order),
        width = COALESCE($8, width),
        height = COALESCE($9, height)
     WHERE album_id = $1 AND id = $2
     RETURNING ",
    item_columns!()
);

pub const DELETE_ITEM: &str = concat!(
    "DELETE FROM gallery_items WHERE album_id = $1 AND id = $2 RETURNING ",
    item_columns!()
);

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Parent collections with their products nested, built in a single statement
pub const INVENTORY_HIERARCHY: &str = r#"
    SELECT COALESCE(json_agg(tree ORDER BY tree.name ASC), '[]'::json) AS hierarchy
    FROM (
        SELECT
            pc.id,
            pc.name,
            (SELECT COUNT(*) FROM products p WHERE p.parent_collection_id = pc.id) AS product_count,
            COALESCE((
                SELECT json_agg(
                    json_build_object(
                        'id', p.id,
                        'name', p.name,
                        'sku', p.sku,
                        'stock_quantity', p.stock_quantity,
                        'is_active', p.is_active
                    ) ORDER BY p.name ASC
                )
                FROM products p
                WHERE p.parent_collection_id = pc.id
            ), '[]'::json) AS products
        FROM parent_collections pc
    ) tree
"#;

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

/// Retail and B2B customers in one list ($1 NULL = any status)
pub const LIST_CUSTOMERS: &str = r#"
    SELECT c.id, c.name, c.email, c.phone, c.is_active,
           ct.name AS customer_type, 'retail' AS segment, c.created_at
    FROM customers c
    LEFT JOIN customer_types ct ON ct.id = c.customer_type_id
    WHERE ($1::boolean IS NULL OR c.is_active = $1)
    UNION ALL
    SELECT b.id, b.company_name AS name, b.email, b.phone, b.is_active,
           ct.name AS customer_type, 'b2b' AS segment, b.created_at
    FROM b2b_customers b
    LEFT JOIN customer_types ct ON ct.id = b.customer_type_id
    WHERE ($1::boolean IS NULL OR b.is_active = $1)
    ORDER BY created_at DESC
"#;

pub const UPDATE_CUSTOMER_STATUS: &str = r#"
    UPDATE customers SET is_active = $2
    WHERE id = $1::bigint
    RETURNING id, name, email, phone, customer_type_id, is_active, created_at
"#;

// ---------------------------------------------------------------------------
// Activity logs
// ---------------------------------------------------------------------------

pub const LIST_ACTIVITY_LOGS: &str = r#"
    SELECT id, admin_id, customer_id, quotation_id, order_id,
           event_type, description, metadata, created_at
    FROM activity_logs
    WHERE ($1::int IS NULL OR customer_id = $1)
      AND ($2::int IS NULL OR order_id = $2)
    ORDER BY created_at DESC, id DESC
    LIMIT $3
"#;
