//! Customer administration route handlers

use crate::db::queries::{LIST_CUSTOMERS, UPDATE_CUSTOMER_STATUS};
use crate::db::row_to_json;
use crate::error::ApiResult;
use crate::models::{ListCustomersQuery, UpdateCustomerStatusRequest};
use crate::state::SharedState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

/// GET /api/admin/customers
pub async fn list_customers(
    State(state): State<SharedState>,
    Query(params): Query<ListCustomersQuery>,
) -> ApiResult<Json<Vec<Value>>> {
    let result = state.db.query(LIST_CUSTOMERS, &[&params.active]).await?;

    debug!("Listed {} customers (active: {:?})", result.row_count, params.active);
    Ok(Json(result.rows.iter().map(row_to_json).collect()))
}

/// PATCH /api/admin/customers/{id}/status
pub async fn update_status(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCustomerStatusRequest>,
) -> ApiResult<Json<Option<Value>>> {
    let result = state
        .db
        .query(UPDATE_CUSTOMER_STATUS, &[&id, &payload.is_active])
        .await?;

    info!(
        "Customer {} set is_active={} ({} row)",
        id, payload.is_active, result.row_count
    );
    Ok(Json(result.first().map(row_to_json)))
}
