//! Links products to their parent collection.

use pavilion_admin::scripts::{self, migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scripts::run(&migrations::LINK_PRODUCTS_TO_COLLECTIONS).await
}
