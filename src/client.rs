//! Fetch-and-save path used by the `cotacao-client` binary.
//!
//! One request against the quote server under a single deadline, then one
//! local file write. Every failure is terminal for the caller; there is no
//! fallback or partial output.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::models::cotacao::PriceResponse;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("quote server did not answer inside the {0:?} deadline")]
    DeadlineExceeded(Duration),

    #[error("transport error reaching the quote server: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("quote server answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed price response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to write cotacao file: {0}")]
    Io(#[from] std::io::Error),
}

/// Requests the current bid from the quote server.
///
/// The deadline covers the entire exchange, body read and decode included.
pub async fn fetch_bid(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<PriceResponse, ClientError> {
    let exchange = async {
        let response = client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let body = response.bytes().await?;
        let price: PriceResponse = serde_json::from_slice(&body).map_err(ClientError::Decode)?;

        Ok(price)
    };

    match tokio::time::timeout(timeout, exchange).await {
        Ok(result) => result,
        Err(_elapsed) => Err(ClientError::DeadlineExceeded(timeout)),
    }
}

/// Writes the single output line, `Dólar: <bid>`, replacing any previous file.
pub fn write_cotacao_file(path: &Path, bid: &str) -> Result<(), ClientError> {
    fs::write(path, format!("Dólar: {bid}"))?;
    Ok(())
}

/// Full client run: fetch the bid, write the file.
pub async fn run(config: &ClientConfig) -> Result<(), ClientError> {
    let client = Client::new();

    let price = fetch_bid(&client, &config.server_url, config.timeout).await?;
    tracing::info!(bid = %price.bid, "received quote from server");

    write_cotacao_file(Path::new(&config.output_file), &price.bid)?;
    tracing::info!(path = %config.output_file, "cotacao file written");

    Ok(())
}
