//! Prints the latest orders and a status breakdown.

use pavilion_admin::scripts::{self, diagnostics};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scripts::run(&diagnostics::CHECK_ORDERS).await
}
