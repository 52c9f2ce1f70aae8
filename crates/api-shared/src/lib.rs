//! # API Shared
//!
//! Shared definitions for ABDM mock APIs.
//!
//! Contains:
//! - Response envelopes (`SuccessEnvelope`, `ErrorEnvelope`) and their fixed messages
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the CLI so both print exactly the same JSON.

pub mod health;

use abdm_core::HealthRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use health::HealthService;

/// `status` value of a successful response.
pub const STATUS_SUCCESS: &str = "success";

/// `message` value of a successful health-records response.
pub const RECORDS_RETRIEVED_MESSAGE: &str = "Health records retrieved successfully";

/// Error code returned when the `identifier` query parameter is absent or empty.
pub const MISSING_IDENTIFIER_ERROR: &str = "Missing identifier parameter";
pub const MISSING_IDENTIFIER_MESSAGE: &str =
    "Please provide either Aadhaar or ABHA number as identifier";

/// Error code returned when the identifier is neither Aadhaar nor ABHA shaped.
pub const INVALID_IDENTIFIER_ERROR: &str = "Invalid identifier format";
pub const INVALID_IDENTIFIER_MESSAGE: &str =
    "Please provide valid Aadhaar (12 digits) or ABHA number (ABHA followed by 10 digits)";

/// Error code returned for unexpected failures.
pub const INTERNAL_ERROR: &str = "Internal server error";
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred while generating records";

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Successful health-records response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuccessEnvelope {
    pub status: String,
    pub message: String,
    pub data: HealthRecord,
}

impl SuccessEnvelope {
    /// Wraps a generated record with the standard status and message.
    pub fn records(data: HealthRecord) -> Self {
        Self {
            status: STATUS_SUCCESS.into(),
            message: RECORDS_RETRIEVED_MESSAGE.into(),
            data,
        }
    }
}

/// Error response: a machine-readable `error` and a human-readable `message`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    pub error: String,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn missing_identifier() -> Self {
        Self::new(MISSING_IDENTIFIER_ERROR, MISSING_IDENTIFIER_MESSAGE)
    }

    pub fn invalid_identifier() -> Self {
        Self::new(INVALID_IDENTIFIER_ERROR, INVALID_IDENTIFIER_MESSAGE)
    }

    pub fn internal() -> Self {
        Self::new(INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}
