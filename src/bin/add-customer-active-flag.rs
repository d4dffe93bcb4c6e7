//! Adds the is_active flag to retail and B2B customers.

use pavilion_admin::scripts::{self, migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scripts::run(&migrations::ADD_CUSTOMER_ACTIVE_FLAG).await
}
