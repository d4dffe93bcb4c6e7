//! DDL for the tables this service owns
//!
//! The gallery tables are bootstrapped by the server on startup; the same
//! statements back the `create-gallery-tables` migration program.

use super::Database;
use crate::error::AppError;
use tracing::info;

pub const CREATE_GALLERY_ALBUMS: &str = r#"
    CREATE TABLE IF NOT EXISTS gallery_albums (
        id SERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        description TEXT,
        cover_image TEXT,
        type VARCHAR(50) NOT NULL DEFAULT 'photo',
        display_order INTEGER NOT NULL DEFAULT 0,
        is_active BOOLEAN NOT NULL DEFAULT true,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

pub const CREATE_GALLERY_ITEMS: &str = r#"
    CREATE TABLE IF NOT EXISTS gallery_items (
        id SERIAL PRIMARY KEY,
        album_id INTEGER NOT NULL REFERENCES gallery_albums(id) ON DELETE CASCADE,
        type VARCHAR(50) NOT NULL DEFAULT 'image',
        url TEXT NOT NULL,
        thumbnail_url TEXT,
        caption TEXT,
        display_order INTEGER NOT NULL DEFAULT 0,
        width INTEGER,
        height INTEGER,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

pub const CREATE_GALLERY_ALBUMS_ORDER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_gallery_albums_display_order ON gallery_albums(display_order)";

pub const CREATE_GALLERY_ITEMS_ALBUM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_gallery_items_album_id ON gallery_items(album_id, display_order)";

pub const CREATE_ACTIVITY_LOGS: &str = r#"
    CREATE TABLE IF NOT EXISTS activity_logs (
        id SERIAL PRIMARY KEY,
        admin_id INTEGER REFERENCES users(id) ON DELETE SET NULL,
        customer_id INTEGER,
        quotation_id INTEGER,
        order_id INTEGER REFERENCES orders(id) ON DELETE SET NULL,
        event_type VARCHAR(100) NOT NULL,
        description TEXT,
        metadata JSONB NOT NULL DEFAULT '{}'::jsonb,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

pub const CREATE_ACTIVITY_LOGS_CUSTOMER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_activity_logs_customer_id ON activity_logs(customer_id)";

pub const CREATE_ACTIVITY_LOGS_ORDER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_activity_logs_order_id ON activity_logs(order_id)";

pub const CREATE_ACTIVITY_LOGS_CREATED_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_activity_logs_created_at ON activity_logs(created_at DESC)";

/// Statements run by [`ensure_gallery_schema`], in order
pub const GALLERY_SCHEMA: &[&str] = &[
    CREATE_GALLERY_ALBUMS,
    CREATE_GALLERY_ITEMS,
    CREATE_GALLERY_ALBUMS_ORDER_INDEX,
    CREATE_GALLERY_ITEMS_ALBUM_INDEX,
];

/// Create the gallery tables if they don't exist
pub async fn ensure_gallery_schema(db: &Database) -> Result<(), AppError> {
    for statement in GALLERY_SCHEMA {
        db.query(statement, &[]).await?;
    }

    info!("✅ Gallery tables initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_schema_is_rerunnable() {
        for statement in GALLERY_SCHEMA {
            assert!(statement.contains("IF NOT EXISTS"), "{statement}");
        }
    }

    #[test]
    fn test_items_table_defaults() {
        assert!(CREATE_GALLERY_ITEMS.contains("type VARCHAR(50) NOT NULL DEFAULT 'image'"));
        assert!(CREATE_GALLERY_ITEMS.contains("display_order INTEGER NOT NULL DEFAULT 0"));
        assert!(CREATE_GALLERY_ITEMS.contains("ON DELETE CASCADE"));
    }
}
