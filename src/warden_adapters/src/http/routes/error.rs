use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use warden_application::{LogoutError, SessionAccountError};

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing token")]
    MissingToken,

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AuthApiError::InvalidInput(_) | AuthApiError::MissingToken => StatusCode::BAD_REQUEST,
            AuthApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<JsonRejection> for AuthApiError {
    fn from(rejection: JsonRejection) -> Self {
        AuthApiError::InvalidInput(rejection.body_text())
    }
}

// The cause is logged here and kept out of the response body.
impl From<LogoutError> for AuthApiError {
    fn from(error: LogoutError) -> Self {
        tracing::error!(error = %error, "Logout failed unexpectedly");
        AuthApiError::Internal
    }
}

impl From<SessionAccountError> for AuthApiError {
    fn from(error: SessionAccountError) -> Self {
        tracing::error!(error = %error, "Session lookup failed unexpectedly");
        AuthApiError::Internal
    }
}
