//! Alpha Vantage API client with rate limiting.

use crate::error::{DataError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};

/// Alpha Vantage query endpoint
const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Default rate limit: 5 requests per minute (free-tier allowance)
const DEFAULT_RATE_LIMIT: Duration = Duration::from_secs(12);

/// Rate limiter to ensure we don't exceed the provider's call frequency
struct RateLimiter {
    last_request: Instant,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Instant::now() - min_interval,
            min_interval,
        }
    }

    async fn wait(&mut self) {
        let elapsed = self.last_request.elapsed();
        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }
        self.last_request = Instant::now();
    }
}

/// Alpha Vantage fundamentals client with rate limiting.
pub struct AlphaVantageClient {
    client: reqwest::Client,
    api_key: String,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    base_url: String,
}

impl AlphaVantageClient {
    /// Create a new client with the default free-tier pacing (5 req/min).
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_rate_limit(api_key, DEFAULT_RATE_LIMIT)
    }

    /// Create a new client with a custom rate limit.
    ///
    /// # Arguments
    /// * `api_key` - Alpha Vantage API key
    /// * `min_interval` - Minimum duration between requests
    ///
    /// # Example
    /// ```no_run
    /// use moat_data::alpha::AlphaVantageClient;
    /// use std::time::Duration;
    ///
    /// # fn example() -> moat_data::Result<()> {
    /// // Premium tier: 75 requests per minute
    /// let client = AlphaVantageClient::with_rate_limit("demo", Duration::from_millis(800))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_rate_limit(api_key: impl Into<String>, min_interval: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(min_interval))),
            base_url: ALPHA_VANTAGE_BASE_URL.to_string(),
        })
    }

    /// Issue a rate-limited query for one API function and parse the JSON
    /// response, surfacing the provider's in-band error and throttle notes.
    pub(crate) async fn get_json(
        &self,
        function: &str,
        symbol: &str,
    ) -> Result<serde_json::Value> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("empty symbol".to_string()));
        }

        let symbol = symbol.to_uppercase();

        self.rate_limiter.lock().await.wait().await;

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("function", function),
                ("symbol", symbol.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(DataError::Network)?;

        if !response.status().is_success() {
            return Err(DataError::ProviderApi(format!(
                "{} request for {} failed: HTTP {}",
                function,
                symbol,
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DataError::ProviderApi(format!("failed to parse {function} response: {e}")))?;

        // The provider reports errors in-band with a 200 status.
        if let Some(message) = body.get("Error Message").and_then(|v| v.as_str()) {
            return Err(DataError::ProviderApi(message.to_string()));
        }
        if let Some(note) = body.get("Note").and_then(|v| v.as_str()) {
            return Err(DataError::RateLimited(note.to_string()));
        }
        if let Some(info) = body.get("Information").and_then(|v| v.as_str()) {
            return Err(DataError::RateLimited(info.to_string()));
        }

        Ok(body)
    }
}

impl std::fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
