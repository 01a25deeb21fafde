use axum::{Json, extract::rejection::PathRejection, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Errori dell'applicazione. Lo status HTTP viene deciso solo in `into_response`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Nessuna identità valida sulla richiesta (usato solo dal middleware)
    #[error("{0}")]
    Unauthenticated(&'static str),

    /// Il chiamante è autenticato ma non ha diritti su questo messaggio
    #[error("{0}")]
    Authorization(&'static str),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Validation {
        message: String,
        details: Option<String>,
    },

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated(_) | Self::Authorization(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),
            other => Self::Database(other),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation {
            message: "Validation error".to_string(),
            details: Some(err.to_string()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation {
            message: "Invalid message id".to_string(),
            details: Some(rejection.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let (message, details) = match self {
            Self::Database(err) => {
                // il dettaglio resta nei log, al client arriva un messaggio generico
                error!("Database error: {:?}", err);
                let message = if status == StatusCode::SERVICE_UNAVAILABLE {
                    "Database unavailable"
                } else {
                    "Internal server error"
                };
                (message.to_string(), None)
            }
            Self::Validation { message, details } => (message, details),
            other => (other.to_string(), None),
        };

        let body = Json(ErrorResponse {
            error: message,
            details,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_authorization_maps_to_401_with_reason() {
        let (status, body) =
            body_json(AppError::Authorization("You are not authorized to view this message")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "You are not authorized to view this message");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_row_not_found_maps_to_404() {
        let (status, body) = body_json(sqlx::Error::RowNotFound.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Resource not found");
    }

    #[tokio::test]
    async fn test_database_errors_are_masked() {
        let (status, body) = body_json(sqlx::Error::PoolTimedOut.into()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Database unavailable");

        let (status, body) = body_json(sqlx::Error::WorkerCrashed.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_validation_carries_details() {
        let err = AppError::Validation {
            message: "Validation error".to_string(),
            details: Some("body: too short".to_string()),
        };
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"], "body: too short");
    }
}
