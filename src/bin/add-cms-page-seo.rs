//! Adds SEO metadata columns to CMS pages.

use pavilion_admin::scripts::{self, migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scripts::run(&migrations::ADD_CMS_PAGE_SEO).await
}
