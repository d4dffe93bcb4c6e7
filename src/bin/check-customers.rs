//! Prints customer counts per type and segment.

use pavilion_admin::scripts::{self, diagnostics};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scripts::run(&diagnostics::CHECK_CUSTOMERS).await
}
