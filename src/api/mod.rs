//! API Module
//!
//! HTTP handlers and routing for the billing gateway REST API.
//!
//! # Endpoints
//! - `GET /api/health` - Health check endpoint
//! - `GET /api/billing/history?user_id=<id>` - Cached billing aggregation
//! - `POST /api/billing/process` - Process a billing charge
//! - `POST /api/billing/validate` - Validate a payment method
//! - `GET /api/stats` - Cache statistics

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
