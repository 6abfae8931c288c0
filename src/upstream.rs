//! Upstream Billing Client
//!
//! Thin HTTP client for the upstream billing service. The history handler
//! treats any failure here as "no data": errors carry context for the log
//! line but never reach the wire.

use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

/// Timeout applied to every upstream request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Raw upstream history payload; only the transaction list is used.
#[derive(Debug, Deserialize)]
struct UpstreamHistory {
    #[serde(default)]
    transactions: Vec<Value>,
}

// == Upstream Client ==
/// Client for the upstream billing service.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Creates a client for the given upstream base URL.
    ///
    /// # Arguments
    /// * `base_url` - Upstream root, e.g. `http://localhost:4000`
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    // == Fetch History ==
    /// Fetches the raw transaction list for a user.
    ///
    /// Calls `GET {base_url}/api/billing/history?user_id=<id>` and returns
    /// the `transactions` array, defaulting to empty when the field is
    /// absent from the payload.
    pub async fn fetch_history(&self, user_id: &str) -> anyhow::Result<Vec<Value>> {
        let url = format!("{}/api/billing/history", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("user_id", user_id)])
            .send()
            .await
            .context("upstream billing request failed")?
            .error_for_status()
            .context("upstream billing returned an error status")?;

        let history: UpstreamHistory = response
            .json()
            .await
            .context("upstream billing payload was not valid JSON")?;

        Ok(history.transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_history_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/billing/history")
            .match_query(mockito::Matcher::UrlEncoded(
                "user_id".into(),
                "u1".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"transactions":[{"id":"t1","amount":9.99}]}"#)
            .create_async()
            .await;

        let client = UpstreamClient::new(server.url());
        let transactions = client.fetch_history("u1").await.unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0]["amount"].as_f64().unwrap(), 9.99);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_history_missing_transactions_field() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/billing/history")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        let client = UpstreamClient::new(server.url());
        let transactions = client.fetch_history("u1").await.unwrap();

        assert!(transactions.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_history_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/billing/history")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = UpstreamClient::new(server.url());
        assert!(client.fetch_history("u1").await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_history_connection_refused() {
        // Port 1 is never listening
        let client = UpstreamClient::new("http://127.0.0.1:1");
        assert!(client.fetch_history("u1").await.is_err());
    }
}
