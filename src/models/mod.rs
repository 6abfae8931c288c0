//! Request and Response models for the billing API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies, including
//! the aggregated billing history stored in the cache.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{HistoryParams, ProcessBillingRequest, ValidatePaymentRequest};
pub use responses::{
    BillingHistory, ErrorResponse, HealthResponse, ProcessBillingResponse, StatsResponse,
    ValidatePaymentResponse,
};
