use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /health — liveness probe with the roster size.
pub async fn health(State(app): State<AppState>) -> Json<serde_json::Value> {
    let activities = app.with_store(|s| s.len());
    Json(serde_json::json!({ "status": "ok", "activities": activities }))
}
