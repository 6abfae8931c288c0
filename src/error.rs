//! Error types for the billing gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Billing Error Enum ==
/// Unified error type for the billing gateway.
///
/// Upstream failures on the history endpoint are deliberately absent: the
/// handler degrades to an empty aggregation instead of surfacing them.
#[derive(Error, Debug)]
pub enum BillingError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for BillingError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            BillingError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            BillingError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the billing gateway.
pub type Result<T> = std::result::Result<T, BillingError>;
