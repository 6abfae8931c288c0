//! Response DTOs for the billing API
//!
//! Defines the structure of outgoing HTTP response bodies, including the
//! aggregated billing history that the cache stores.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregated billing history for one user (GET /api/billing/history).
///
/// This is the value the cache stores: the upstream transaction list is kept
/// opaque, and `total_amount` is computed once at aggregation time. The
/// `timestamp` records when the aggregation was built, so a cache hit
/// returns the original aggregation time, not the serving time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingHistory {
    /// The user whose history was aggregated
    pub user_id: String,
    /// Raw upstream transactions, passed through untouched
    pub transactions: Vec<Value>,
    /// Sum of the numeric `amount` fields across transactions
    pub total_amount: f64,
    /// Aggregation time in RFC 3339 format
    pub timestamp: String,
}

impl BillingHistory {
    /// Builds an aggregation from upstream transactions.
    ///
    /// Transactions without a numeric `amount` contribute zero to the total.
    pub fn aggregate(user_id: impl Into<String>, transactions: Vec<Value>) -> Self {
        let total_amount = transactions
            .iter()
            .filter_map(|tx| tx.get("amount"))
            .filter_map(Value::as_f64)
            .sum();

        Self {
            user_id: user_id.into(),
            transactions,
            total_amount,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// The fallback aggregation served when the upstream fetch fails.
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self::aggregate(user_id, Vec::new())
    }
}

/// Response body for POST /api/billing/process
#[derive(Debug, Clone, Serialize)]
pub struct ProcessBillingResponse {
    /// The billed user
    pub user_id: String,
    /// Subscription plan name
    pub plan: String,
    /// Amount charged
    pub amount: f64,
    /// Processing status, always "processed"
    pub status: String,
    /// Generated transaction identifier
    pub transaction_id: String,
    /// Processing time in RFC 3339 format
    pub processed_at: String,
}

impl ProcessBillingResponse {
    /// Creates a processed-billing response with a fresh transaction id.
    pub fn new(user_id: String, plan: String, amount: f64) -> Self {
        Self {
            user_id,
            plan,
            amount,
            status: "processed".to_string(),
            transaction_id: uuid::Uuid::new_v4().to_string(),
            processed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for POST /api/billing/validate
#[derive(Debug, Clone, Serialize)]
pub struct ValidatePaymentResponse {
    /// Whether the payment method passed validation
    pub valid: bool,
    /// The payment method echoed back, null when absent
    pub payment_method: Option<String>,
    /// Confidence score of the validation
    pub validation_score: f64,
    /// Validation time in RFC 3339 format
    pub timestamp: String,
}

impl ValidatePaymentResponse {
    /// Validates a payment method: any non-blank label is accepted.
    pub fn from_method(payment_method: Option<String>) -> Self {
        let valid = payment_method
            .as_deref()
            .is_some_and(|method| !method.trim().is_empty());

        Self {
            valid,
            payment_method,
            validation_score: 0.95,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the health endpoint (GET /api/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g. "healthy")
    pub status: String,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Current timestamp in RFC 3339 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "billing-gateway".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the stats endpoint (GET /api/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed by size-bound eviction
    pub evictions: u64,
    /// Number of entries removed after their TTL elapsed
    pub expired: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a StatsResponse from cache statistics
    pub fn from_stats(stats: &crate::cache::CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expired: stats.expired,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
