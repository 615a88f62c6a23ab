//! # API Error Types
//!
//! Errors returned to HTTP clients.
//!
//! ## Design
//! Every failure leaves the server as a JSON body with a stable code and a
//! human-readable message:
//!
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "message": "Receipt not found: 7fb1377b-b223-49d9-a31a-5a02701dd310"
//! }
//! ```
//!
//! ## Status Mapping
//! ```text
//! ┌──────────────────────┬─────────────┬──────────────────────────────────┐
//! │ ErrorCode            │ Status      │ Raised by                        │
//! ├──────────────────────┼─────────────┼──────────────────────────────────┤
//! │ NOT_FOUND            │ 404         │ unknown receipt id, unknown path │
//! │ VALIDATION_ERROR     │ 400         │ strict-mode field checks         │
//! │ BAD_REQUEST          │ 400         │ body is not a receipt document   │
//! │ METHOD_NOT_ALLOWED   │ 405         │ known path, unsupported method   │
//! │ INTERNAL             │ 500         │ anything unexpected              │
//! └──────────────────────┴─────────────┴──────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use points_store::StoreError;
use serde::Serialize;

/// Error code sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    BadRequest,
    MethodNotAllowed,
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError | ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Serialized error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::not_found("Receipt", id.as_str()),
            StoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Every body the JSON extractor rejects becomes a 400, whatever status axum
/// would have picked.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(status = %rejection.status(), "Rejected request body");
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.code == ErrorCode::Internal {
            tracing::error!(message = %self.message, "Internal error");
        }
        (self.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use points_core::ValidationError;
    use points_store::ReceiptId;

    #[test]
    fn test_error_serialization() {
        let err = ApiError::not_found("Receipt", "abc");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Receipt not found: abc");
    }

    #[test]
    fn test_store_error_mapping() {
        let err: ApiError = StoreError::NotFound(ReceiptId::new("r-9")).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Receipt not found: r-9");

        let err: ApiError = StoreError::Validation(ValidationError::Required {
            field: "retailer".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "retailer is required");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorCode::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ErrorCode::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ApiError::internal("boom").into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_method_not_allowed_serialization() {
        let json = serde_json::to_value(ApiError::new(ErrorCode::MethodNotAllowed, "nope")).unwrap();
        assert_eq!(json["code"], "METHOD_NOT_ALLOWED");
    }

    #[test]
    fn test_display() {
        let err = ApiError::validation("total is required");
        assert_eq!(err.to_string(), "[ValidationError] total is required");
    }
}
