//! `vitalwatch-agent` -- IoT sensor simulator.
//!
//! Streams synthetic vital-sign readings to the VitalWatch backend over
//! HTTP on a fixed interval.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default                             | Description                    |
//! |-----------------------|----------|-------------------------------------|--------------------------------|
//! | `INGEST_URL`          | no       | `http://127.0.0.1:3000/ingest`      | Backend ingestion endpoint     |
//! | `AGENT_INTERVAL_SECS` | no       | `5`                                 | Seconds between readings       |

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitalwatch_agent::collector::ReadingGenerator;
use vitalwatch_agent::sender;

/// Default interval between generated readings.
const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Default ingestion endpoint for local development.
const DEFAULT_INGEST_URL: &str = "http://127.0.0.1:3000/ingest";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitalwatch_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ingest_url =
        std::env::var("INGEST_URL").unwrap_or_else(|_| DEFAULT_INGEST_URL.to_string());

    let interval_secs: u64 = std::env::var("AGENT_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    let interval = Duration::from_secs(interval_secs);

    tracing::info!(
        ingest_url = %ingest_url,
        interval_secs,
        "Starting vitalwatch-agent",
    );

    let generator = ReadingGenerator::new();

    sender::run(&ingest_url, interval, &generator).await;

    Ok(())
}
