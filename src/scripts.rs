//! Run-once migration and diagnostic programs
//!
//! Each binary under `src/bin/` hands one [`Script`] to [`run`]. A script
//! holds a single connection, runs its steps in order outside any
//! transaction, prints what they return and stops at the first failure.
//! Steps already applied stay applied; the migrations use `IF NOT EXISTS` /
//! `ON CONFLICT` so running them again is harmless.

pub mod diagnostics;
pub mod migrations;

use crate::config::ScriptConfig;
use crate::db::{row_to_json, Database};
use crate::error::driver_message;
use anyhow::Context;
use tokio_postgres::Client;
use tracing::{error, info};

/// One statement of a script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// DDL/DML; the number of affected rows is printed
    Execute(&'static str),
    /// SELECT; every row is printed as a JSON line
    Query(&'static str),
}

impl Step {
    pub fn sql(&self) -> &'static str {
        match *self {
            Step::Execute(sql) | Step::Query(sql) => sql,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Migration,
    Diagnostic,
}

#[derive(Debug)]
pub struct Script {
    pub name: &'static str,
    pub kind: ScriptKind,
    pub description: &'static str,
    pub steps: &'static [Step],
}

/// What a completed script did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScriptReport {
    pub steps_completed: usize,
    pub rows_affected: u64,
    pub rows_returned: usize,
}

/// Entry point for the script binaries
pub async fn run(script: &Script) -> anyhow::Result<()> {
    crate::telemetry::init_tracing();

    let config = ScriptConfig::from_env()?;
    info!("▶ {} - {}", script.name, script.description);

    let db = Database::from_config(&config.database)?;
    let client = db
        .pool()
        .get()
        .await
        .context("Failed to connect to database")?;

    let outcome = run_script(&client, script).await;
    drop(client);
    db.pool().close();

    match outcome {
        Ok(report) => {
            info!(
                steps = report.steps_completed,
                rows_affected = report.rows_affected,
                rows_returned = report.rows_returned,
                "✅ {} finished",
                script.name
            );
            Ok(())
        }
        Err(e) => {
            error!("❌ {} failed: {}", script.name, driver_message(&e));
            Err(e.into())
        }
    }
}

/// Run every step of `script` in order, stopping at the first error
pub async fn run_script(
    client: &Client,
    script: &Script,
) -> Result<ScriptReport, tokio_postgres::Error> {
    let mut report = ScriptReport::default();
    let total = script.steps.len();

    for (idx, step) in script.steps.iter().enumerate() {
        info!("[{}/{}] {}", idx + 1, total, summarize(step.sql()));

        match step {
            Step::Execute(sql) => {
                let affected = client.execute(*sql, &[]).await?;
                println!("-- {} row(s) affected", affected);
                report.rows_affected += affected;
            }
            Step::Query(sql) => {
                let rows = client.query(*sql, &[]).await?;
                for row in &rows {
                    println!("{}", row_to_json(row));
                }
                println!("-- {} row(s)", rows.len());
                report.rows_returned += rows.len();
            }
        }

        report.steps_completed += 1;
    }

    Ok(report)
}

/// First line of a statement, whitespace collapsed, for progress logging
fn summarize(sql: &str) -> String {
    let line = sql
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default();
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Every script shipped as a binary
pub const ALL: &[&Script] = &[
    &migrations::CREATE_GALLERY_TABLES,
    &migrations::ADD_CUSTOMER_ACTIVE_FLAG,
    &migrations::CREATE_ACTIVITY_LOGS,
    &migrations::LINK_PRODUCTS_TO_COLLECTIONS,
    &migrations::SEED_ADMIN_PERMISSIONS,
    &migrations::ADD_CMS_PAGE_SEO,
    &diagnostics::CHECK_CUSTOMERS,
    &diagnostics::CHECK_ORDERS,
    &diagnostics::CHECK_ADMIN_USERS,
];
