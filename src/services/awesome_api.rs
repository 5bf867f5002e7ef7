use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::models::cotacao::{AwesomeApiResponse, Quote};

/// Failure modes of one upstream quote fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The whole exchange (connect, request, body read, decode) did not
    /// finish inside the configured deadline.
    #[error("quote fetch exceeded its {0:?} deadline")]
    DeadlineExceeded(Duration),

    #[error("transport error reaching awesomeapi: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("awesomeapi answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed quote payload: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Client for the awesomeapi economia quote endpoint.
#[derive(Clone)]
pub struct AwesomeApiService {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl AwesomeApiService {
    /// `timeout` bounds each call as a whole; the inner `reqwest::Client`
    /// carries no timeout of its own.
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url,
            timeout,
        }
    }

    /// Fetches the current USD-BRL quote.
    ///
    /// A single deadline governs the entire exchange; elapsing at any stage
    /// surfaces as [`FetchError::DeadlineExceeded`], recognized by the timer's
    /// cancellation result rather than by measuring elapsed time. No retries.
    pub async fn fetch_usd_brl(&self) -> Result<Quote, FetchError> {
        let url = format!("{}/json/last/USD-BRL", self.base_url);

        let exchange = async {
            let response = self.client.get(&url).send().await?;

            if !response.status().is_success() {
                return Err(FetchError::Status(response.status()));
            }

            let body = response.bytes().await?;
            let decoded: AwesomeApiResponse =
                serde_json::from_slice(&body).map_err(FetchError::Decode)?;

            Ok(decoded.usdbrl)
        };

        let quote = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result?,
            Err(_elapsed) => return Err(FetchError::DeadlineExceeded(self.timeout)),
        };

        tracing::info!(pair = %quote.name, bid = %quote.bid, "fetched USD-BRL quote");

        Ok(quote)
    }
}
