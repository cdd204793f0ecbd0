use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::TeamServiceError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 403 Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<TeamServiceError> for ApiError {
    fn from(err: TeamServiceError) -> Self {
        let message = err.to_string();
        tracing::debug!(kind = err.kind(), error = %message, "Team operation failed");

        match err {
            TeamServiceError::InvalidInput(_) => Self::bad_request(message),
            TeamServiceError::NotFound(_) | TeamServiceError::PlayerNotFound { .. } => {
                Self::not_found(message)
            }
            TeamServiceError::DuplicateName(_) => Self::conflict(message),
            // Authenticated, but not the owner
            TeamServiceError::Unauthorized { .. } => Self::forbidden(message),
            TeamServiceError::Storage(_) => {
                tracing::error!(error = %message, "Team store failure");
                Self::internal_server_error(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::StoreError;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = vec![
            (
                TeamServiceError::InvalidInput("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (TeamServiceError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                TeamServiceError::PlayerNotFound {
                    team_id: "t".into(),
                    player_name: "Sam".into(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                TeamServiceError::DuplicateName("Hawks".into()),
                StatusCode::CONFLICT,
            ),
            (
                TeamServiceError::Unauthorized { team_id: "t".into() },
                StatusCode::FORBIDDEN,
            ),
            (
                TeamServiceError::Storage(StoreError::LockPoisoned("x".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn message_names_offending_value() {
        let err = ApiError::from(TeamServiceError::DuplicateName("Hawks".into()));
        assert!(err.message.contains("Hawks"));
    }
}
