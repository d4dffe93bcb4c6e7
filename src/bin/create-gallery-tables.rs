//! Creates the gallery album and item tables.

use pavilion_admin::scripts::{self, migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scripts::run(&migrations::CREATE_GALLERY_TABLES).await
}
