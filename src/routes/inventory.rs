//! Catalog hierarchy for the admin inventory screen

use crate::db::queries::INVENTORY_HIERARCHY;
use crate::error::ApiResult;
use crate::state::SharedState;
use axum::{extract::State, Json};
use serde_json::Value;

/// GET /api/admin/inventory-hierarchy
///
/// The tree is assembled by Postgres; the handler only unwraps the one
/// `hierarchy` column.
pub async fn get_hierarchy(State(state): State<SharedState>) -> ApiResult<Json<Value>> {
    let result = state.db.query(INVENTORY_HIERARCHY, &[]).await?;

    let hierarchy = match result.first() {
        Some(row) => row.try_get::<_, Option<Value>>("hierarchy")?,
        None => None,
    };

    Ok(Json(hierarchy.unwrap_or_else(|| Value::Array(Vec::new()))))
}
