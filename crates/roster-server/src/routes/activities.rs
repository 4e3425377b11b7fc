use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use roster_core::store::RosterSnapshot;
use roster_core::RosterError;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct EmailParams {
    pub email: String,
}

/// Missing or malformed query strings become a 422 rather than axum's
/// default 400, which is reserved for roster conflicts.
fn email_param(query: Result<Query<EmailParams>, QueryRejection>) -> Result<String, AppError> {
    match query {
        Ok(Query(params)) => Ok(params.email),
        Err(rejection) => Err(AppError::validation(rejection.body_text())),
    }
}

/// A name segment axum cannot decode (e.g. percent-encoded bytes that are
/// not UTF-8) can never match a roster key, so it is reported as an unknown
/// activity instead of axum's plain-text 400.
fn activity_param(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    match path {
        Ok(Path(name)) => Ok(name),
        Err(rejection) => Err(RosterError::ActivityNotFound(rejection.body_text()).into()),
    }
}

/// GET /activities — every activity keyed by name.
pub async fn list_activities(State(app): State<AppState>) -> Json<RosterSnapshot> {
    Json(app.with_store(|s| s.list_activities()))
}

/// POST /activities/{name}/signup?email=<email>
pub async fn signup(
    State(app): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailParams>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let name = activity_param(path)?;
    let email = email_param(query)?;
    let confirmation = app
        .with_store(|s| s.signup(&name, &email))
        .inspect_err(|e| tracing::debug!(activity = %name, %email, "signup rejected: {e}"))?;

    tracing::info!(activity = %name, %email, "signed up");
    Ok(Json(serde_json::json!({ "message": confirmation.to_string() })))
}

/// DELETE /activities/{name}/remove?email=<email>
pub async fn withdraw(
    State(app): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailParams>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let name = activity_param(path)?;
    let email = email_param(query)?;
    let confirmation = app
        .with_store(|s| s.withdraw(&name, &email))
        .inspect_err(|e| tracing::debug!(activity = %name, %email, "withdraw rejected: {e}"))?;

    tracing::info!(activity = %name, %email, "withdrew");
    Ok(Json(serde_json::json!({ "message": confirmation.to_string() })))
}
