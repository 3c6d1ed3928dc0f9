use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use expense_application::{LoginError, RegisterError};
use expense_core::UserError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    /// Missing, unparsable or incomplete body. Answered with an empty 400.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Invalid user credentials.")]
    InvalidCredentials,

    #[error("Email is already in-use.")]
    EmailInUse,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::MalformedRequest(reason) => {
                tracing::debug!(%reason, "Rejected malformed request");
                return StatusCode::BAD_REQUEST.into_response();
            }

            AuthApiError::InvalidCredentials => (StatusCode::BAD_REQUEST, self.to_string()),

            AuthApiError::EmailInUse => (StatusCode::CONFLICT, self.to_string()),

            AuthApiError::UnexpectedError(e) => {
                tracing::error!(error = %e, "Request failed unexpectedly");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            message: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<JsonRejection> for AuthApiError {
    fn from(rejection: JsonRejection) -> Self {
        AuthApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<UserError> for AuthApiError {
    fn from(error: UserError) -> Self {
        AuthApiError::MalformedRequest(error.to_string())
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => AuthApiError::InvalidCredentials,
            e @ (LoginError::UserStoreError(_)
            | LoginError::PasswordHasherError(_)
            | LoginError::TokenIssuerError(_)) => AuthApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::EmailInUse => AuthApiError::EmailInUse,
            e @ (RegisterError::UserStoreError(_) | RegisterError::PasswordHasherError(_)) => {
                AuthApiError::UnexpectedError(e.to_string())
            }
        }
    }
}
