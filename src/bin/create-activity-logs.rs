//! Creates the admin activity log table.

use pavilion_admin::scripts::{self, migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scripts::run(&migrations::CREATE_ACTIVITY_LOGS).await
}
