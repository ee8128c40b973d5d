//! Homework statuses API
//!
//! A single endpoint: `GET <endpoint>?from_date=<unix ts>` with an
//! `Authorization: OAuth <token>` header. The body is returned as raw JSON;
//! shape checks belong to `hwbot_core::check_response`.

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::handle_response;

/// HTTP client for the homework statuses API
#[derive(Clone)]
pub struct PracticumClient {
    /// Full endpoint URL, queried as-is
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    client: Client,
}

impl PracticumClient {
    /// Create a new client with a default HTTP client
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp, start of the query window
    ///
    /// # Returns
    /// The decoded JSON body of a successful answer
    pub async fn get_homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!(
            "Requesting homework statuses from {} (from_date={})",
            self.endpoint, from_date
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        handle_response(response).await
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"***")
            .finish()
    }
}
