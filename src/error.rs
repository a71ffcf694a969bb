use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::constants::{
    ERR_DECODE_REQUEST, ERR_INTERNAL, ERR_INVALID_USERNAME, ERR_REQUEST_TIMEOUT,
    ERR_USER_EXISTS, ERR_USER_NOT_FOUND,
};
use crate::db::codec::CodecError;
use crate::routes::response::ApiResponse;

/// Errors returned by the user store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("user not found")]
    UserNotFound,

    #[error("user already exists")]
    UserExists,

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", ERR_DECODE_REQUEST)]
    MalformedRequest(#[from] JsonRejection),

    #[error("{0}")]
    Validation(String),

    #[error("{}", ERR_INVALID_USERNAME)]
    InvalidUsername,

    #[error("{}", ERR_USER_EXISTS)]
    UserExists,

    #[error("{}", ERR_USER_NOT_FOUND)]
    UserNotFound,

    #[error("{}", ERR_REQUEST_TIMEOUT)]
    RequestTimeout,

    /// Middleware failure that is not a timeout; details stay in the logs
    #[error("{}", ERR_INTERNAL)]
    Middleware(#[source] axum::BoxError),

    /// Any other store failure; `context` is the only part shown to clients
    #[error("{context}")]
    Internal {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Map a store error into the HTTP taxonomy
    ///
    /// `context` is the opaque message ("failed to ...") used for every
    /// failure other than a missing or duplicate user.
    pub fn from_store(context: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::UserNotFound => AppError::UserNotFound,
            StoreError::UserExists => AppError::UserExists,
            source => AppError::Internal { context, source },
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedRequest(_) | AppError::Validation(_) | AppError::InvalidUsername => {
                StatusCode::BAD_REQUEST
            }
            AppError::UserExists => StatusCode::CONFLICT,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Middleware(_) | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Implement IntoResponse to convert AppError into the response envelope
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal { context, source } => {
                tracing::error!(error = %source, "{}", context);
            }
            AppError::Middleware(source) => {
                tracing::error!(error = %source, "unhandled middleware error");
            }
            AppError::RequestTimeout => {
                tracing::warn!("request timed out");
            }
            AppError::MalformedRequest(rejection) => {
                tracing::warn!(error = %rejection, "failed to decode request");
            }
            _ => {}
        }

        (self.status(), Json(ApiResponse::error(self.to_string()))).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_store_keeps_user_facing_kinds() {
        assert!(matches!(
            AppError::from_store("failed to get user", StoreError::UserNotFound),
            AppError::UserNotFound
        ));
        assert!(matches!(
            AppError::from_store("failed to save user", StoreError::UserExists),
            AppError::UserExists
        ));
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = AppError::from_store(
            "failed to get user",
            StoreError::Database(sqlx::Error::PoolTimedOut),
        );

        assert_eq!(err.to_string(), "failed to get user");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidUsername.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Validation("field username is required".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::UserExists.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::RequestTimeout.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
