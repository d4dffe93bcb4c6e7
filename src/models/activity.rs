//! Admin activity log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

pub const DEFAULT_ACTIVITY_LIMIT: i64 = 50;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityLog {
    pub id: i32,
    pub admin_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub quotation_id: Option<i32>,
    pub order_id: Option<i32>,
    pub event_type: String,
    pub description: Option<String>,
    /// Opaque to this service
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl ActivityLog {
    pub fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            admin_id: row.try_get("admin_id")?,
            customer_id: row.try_get("customer_id")?,
            quotation_id: row.try_get("quotation_id")?,
            order_id: row.try_get("order_id")?,
            event_type: row.try_get("event_type")?,
            description: row.try_get("description")?,
            metadata: row.try_get("metadata")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ActivityLogQuery {
    pub customer_id: Option<i32>,
    pub order_id: Option<i32>,
    pub limit: Option<i64>,
}

impl ActivityLogQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT)
    }
}
