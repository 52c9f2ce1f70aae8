//! HTTP error mapping.
//!
//! Every failure leaves the service as an [`ErrorEnvelope`] JSON body. Identifier problems are
//! client errors (`400`); anything else is reported as `500` without exposing internals.

use abdm_core::IdentifierError;
use api_shared::ErrorEnvelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing identifier parameter")]
    MissingIdentifier,
    #[error("invalid identifier format")]
    InvalidIdentifierFormat,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingIdentifier | ApiError::InvalidIdentifierFormat => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            ApiError::MissingIdentifier => ErrorEnvelope::missing_identifier(),
            ApiError::InvalidIdentifierFormat => ErrorEnvelope::invalid_identifier(),
            ApiError::Internal(_) => ErrorEnvelope::internal(),
        }
    }
}

impl From<IdentifierError> for ApiError {
    fn from(err: IdentifierError) -> Self {
        match err {
            IdentifierError::Empty => ApiError::MissingIdentifier,
            IdentifierError::InvalidFormat => ApiError::InvalidIdentifierFormat,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!("Internal error: {}", detail);
        }
        (self.status(), Json(self.envelope())).into_response()
    }
}
