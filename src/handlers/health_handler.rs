use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::AppState;

pub async fn health_checker_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn db_health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match state.db.test_connection().await {
        Ok(_) => Ok(Json(json!({ "status": "ok", "database": "reachable" }))),
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
