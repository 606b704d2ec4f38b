use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use userstore_core::storage::RepositoryError;

/// Handler error rendered as `{"message": ...}`.
///
/// Store failures carry the underlying error for the log line only; the
/// caller always sees the fixed message.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be decoded.
    BadRequest(String),
    /// A point lookup found no record.
    NotFound,
    /// The store call failed.
    Store {
        source: RepositoryError,
        message: &'static str,
    },
    /// A handler panicked.
    Panic,
}

impl ApiError {
    pub fn store(source: RepositoryError, message: &'static str) -> Self {
        Self::Store { source, message }
    }

    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Invalid request payload"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "User not found"),
            ApiError::Store { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, *message),
            ApiError::Panic => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            ApiError::BadRequest(detail) => {
                tracing::warn!(status = %status, detail = %detail, "Rejected request body");
            }
            ApiError::Store { source, .. } => {
                tracing::error!(
                    error = %source,
                    retryable = source.is_retryable(),
                    "{message}"
                );
            }
            ApiError::NotFound | ApiError::Panic => {}
        }

        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

/// Converts a caught handler panic into a 500 response.
///
/// Used by `CatchPanicLayer`; the server keeps serving afterwards.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "Handler panicked");

    ApiError::Panic.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("eof".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Panic.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_every_store_error_is_500() {
        let errors = [
            RepositoryError::ConnectionFailed("reset".into()),
            RepositoryError::Throttled("slow down".into()),
            RepositoryError::Unavailable("internal".into()),
            RepositoryError::QueryFailed("denied".into()),
            RepositoryError::InvalidData("bad age".into()),
        ];

        for error in errors {
            let response = ApiError::store(error, "Failed to retrieve users").into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_store_message_hides_detail() {
        let error = ApiError::store(
            RepositoryError::QueryFailed("Table not found".into()),
            "Failed to create user",
        );
        assert_eq!(
            error.status_and_message(),
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user")
        );
    }

    #[test]
    fn test_handle_panic_accepts_any_payload() {
        let response = handle_panic(Box::new(42_u32));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
