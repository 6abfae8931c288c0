//! API Handlers
//!
//! HTTP request handlers for each billing gateway endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::error::{BillingError, Result};
use crate::models::{
    BillingHistory, HealthResponse, HistoryParams, ProcessBillingRequest, ProcessBillingResponse,
    StatsResponse, ValidatePaymentRequest, ValidatePaymentResponse,
};
use crate::upstream::UpstreamClient;

/// The cache holding aggregated billing histories, keyed by user.
pub type HistoryCache = ResponseCache<BillingHistory>;

/// Derives the cache key for a user's billing history.
fn history_key(user_id: &str) -> String {
    format!("billing:{user_id}")
}

/// Application state shared across all handlers.
///
/// The cache is explicitly constructed at startup and injected here; its
/// lifetime is the process lifetime, and nothing else holds it.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe billing history cache
    pub cache: Arc<RwLock<HistoryCache>>,
    /// Client for the upstream billing service
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Creates a new AppState with the given cache and upstream client.
    pub fn new(cache: HistoryCache, upstream: UpstreamClient) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            upstream,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            HistoryCache::with_defaults(),
            UpstreamClient::new(config.upstream_url.clone()),
        )
    }
}

/// Handler for GET /api/billing/history
///
/// Serves the cached aggregation when one exists and is within TTL;
/// otherwise fetches the user's transactions upstream, aggregates them, and
/// caches the result. An upstream failure degrades to an empty aggregation
/// that is never cached, so the next request retries the fetch.
pub async fn history_handler(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<BillingHistory>> {
    let user_id = params
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| BillingError::InvalidRequest("user_id required".to_string()))?;

    let key = history_key(&user_id);

    // Lock only for the lookup; the upstream fetch happens without it
    if let Some(cached) = state.cache.write().await.get(&key) {
        debug!(user_id = %user_id, "billing history served from cache");
        return Ok(Json(cached));
    }

    let history = match state.upstream.fetch_history(&user_id).await {
        Ok(transactions) => {
            let history = BillingHistory::aggregate(&user_id, transactions);
            state.cache.write().await.insert(key, history.clone());
            history
        }
        Err(error) => {
            // Degrade rather than fail, and leave the cache untouched
            warn!(user_id = %user_id, error = %error, "upstream history fetch failed, serving empty aggregation");
            BillingHistory::empty(&user_id)
        }
    };

    Ok(Json(history))
}

/// Handler for POST /api/billing/process
///
/// Records a billing charge and returns the generated transaction. No cache
/// involvement.
pub async fn process_handler(
    Json(req): Json<ProcessBillingRequest>,
) -> Result<Json<ProcessBillingResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(BillingError::InvalidRequest(error_msg));
    }

    // validate() guarantees all three fields are present
    let (user_id, plan, amount) = match (req.user_id, req.plan, req.amount) {
        (Some(user_id), Some(plan), Some(amount)) => (user_id, plan, amount),
        _ => {
            return Err(BillingError::Internal(
                "validated request missing fields".to_string(),
            ))
        }
    };

    Ok(Json(ProcessBillingResponse::new(user_id, plan, amount)))
}

/// Handler for POST /api/billing/validate
pub async fn validate_handler(
    Json(req): Json<ValidatePaymentRequest>,
) -> Json<ValidatePaymentResponse> {
    Json(ValidatePaymentResponse::from_method(req.payment_method))
}

/// Handler for GET /api/stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from_stats(&cache.stats()))
}

/// Handler for GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
