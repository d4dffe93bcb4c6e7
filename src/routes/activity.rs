//! Activity log feed

use crate::db::queries::LIST_ACTIVITY_LOGS;
use crate::error::ApiResult;
use crate::models::{ActivityLog, ActivityLogQuery};
use crate::state::SharedState;
use axum::{
    extract::{Query, State},
    Json,
};

/// GET /api/admin/activity-logs
pub async fn list_activity_logs(
    State(state): State<SharedState>,
    Query(params): Query<ActivityLogQuery>,
) -> ApiResult<Json<Vec<ActivityLog>>> {
    let limit = params.limit();
    let result = state
        .db
        .query(
            LIST_ACTIVITY_LOGS,
            &[&params.customer_id, &params.order_id, &limit],
        )
        .await?;

    let logs = result
        .rows
        .iter()
        .map(ActivityLog::from_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(logs))
}
