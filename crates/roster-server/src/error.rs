use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::{ErrorKind, RosterError};

// ---------------------------------------------------------------------------
// Internal sentinel for request validation failures
// ---------------------------------------------------------------------------

/// Carries a 422 through the `anyhow::Error` chain for input the router
/// rejected before it reached the roster.
#[derive(Debug)]
struct ValidationError(String);

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses. Bodies are `{"detail": "..."}`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 422 Unprocessable Entity error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self(ValidationError(msg.into()).into())
    }

    fn status(&self) -> StatusCode {
        if self.0.downcast_ref::<ValidationError>().is_some() {
            return StatusCode::UNPROCESSABLE_ENTITY;
        }
        match self.0.downcast_ref::<RosterError>().map(RosterError::kind) {
            Some(ErrorKind::NotFound) => StatusCode::NOT_FOUND,
            Some(ErrorKind::Conflict) => StatusCode::BAD_REQUEST,
            Some(ErrorKind::Invalid) => StatusCode::UNPROCESSABLE_ENTITY,
            Some(ErrorKind::Internal) | None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {:#}", self.0);
        }
        let body = serde_json::json!({ "detail": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn activity_not_found_maps_to_404() {
        let err = AppError(RosterError::ActivityNotFound("Nope".into()).into());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_registered_maps_to_404() {
        let err = AppError::from(RosterError::NotRegistered {
            activity: "Chess Club".into(),
            email: "a@test.com".into(),
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn already_signed_up_maps_to_400() {
        let err = AppError::from(RosterError::AlreadySignedUp {
            activity: "Chess Club".into(),
            email: "a@test.com".into(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn activity_full_maps_to_400() {
        let err = AppError::from(RosterError::ActivityFull("Chess Club".into()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_maps_to_422() {
        let err = AppError::validation("missing field `email`");
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn io_error_maps_to_500() {
        let err = AppError::from(RosterError::Io(std::io::Error::other("disk full")));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_roster_error_maps_to_500() {
        let err = AppError(anyhow::anyhow!("something unexpected"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_body_is_json() {
        let err = AppError::from(RosterError::ActivityFull("Chess Club".into()));
        let response = err.into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(ct.to_str().unwrap().contains("application/json"));
    }
}
