//! Prints users with their role and permission count.

use pavilion_admin::scripts::{self, diagnostics};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scripts::run(&diagnostics::CHECK_ADMIN_USERS).await
}
