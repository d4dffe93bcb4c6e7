//! Seeds back office permissions for the admin role.

use pavilion_admin::scripts::{self, migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scripts::run(&migrations::SEED_ADMIN_PERMISSIONS).await
}
