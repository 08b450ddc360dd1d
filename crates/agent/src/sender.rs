//! Reading push loop.
//!
//! Periodically generates a synthetic reading via
//! [`ReadingGenerator`](crate::collector::ReadingGenerator) and POSTs it to
//! the backend ingestion endpoint. Send failures are logged and the loop
//! keeps going; the agent never gives up on a flaky backend.

use std::time::Duration;

use crate::collector::ReadingGenerator;

/// HTTP request timeout for a single push.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Run the push loop indefinitely.
///
/// This function never returns under normal operation.
pub async fn run(ingest_url: &str, interval: Duration, generator: &ReadingGenerator) {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build reqwest HTTP client");

    let mut ticker = tokio::time::interval(interval);

    loop {
        ticker.tick().await;

        let reading = generator.generate();

        match client.post(ingest_url).json(&reading).send().await {
            Ok(response) if response.status().is_success() => {
                let status = response
                    .json::<serde_json::Value>()
                    .await
                    .ok()
                    .and_then(|v| v["status"].as_str().map(str::to_owned))
                    .unwrap_or_else(|| "unknown".into());

                tracing::info!(
                    hr = reading.hr,
                    spo2 = reading.spo2,
                    temp = reading.temp,
                    status = %status,
                    "Reading sent"
                );
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status().as_u16(),
                    "Backend rejected reading"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to send reading");
            }
        }
    }
}
