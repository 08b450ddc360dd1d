//! Ledger anchoring of reading fingerprints.
//!
//! The ledger is an external tamper-evident store: the pipeline appends a
//! 32-byte fingerprint after each fatal reading, and auditors can later
//! check whether a given fingerprint was anchored. [`LedgerClient`] is a
//! thin HTTP adapter over that contract -- `POST {base}/anchor` and
//! `GET {base}/verify/{hex}` -- with a bounded request timeout so a stalled
//! confirmation can never hold resources indefinitely. If `LEDGER_URL` is
//! not set the sink is [`LedgerSink::Unavailable`].

use std::time::Duration;

use serde::Deserialize;

/// HTTP request timeout for anchor and verify calls. Anchoring may block on
/// an external confirmation, so every call is bounded by this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The ledger service returned a non-2xx status code.
    #[error("Ledger returned HTTP {0}")]
    HttpStatus(u16),

    /// The sink was never configured (`LEDGER_URL` unset).
    #[error("Ledger sink is not configured")]
    NotConfigured,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Configuration for the ledger anchoring client.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Base URL of the anchoring service.
    pub base_url: String,
}

impl LedgerConfig {
    /// Create a config, normalizing away any trailing slash on the URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `LEDGER_URL` is not set, signalling that
    /// anchoring is not configured and fatal readings are recorded in the
    /// database only.
    pub fn from_env() -> Option<Self> {
        std::env::var("LEDGER_URL").ok().map(Self::new)
    }
}

// ---------------------------------------------------------------------------
// LedgerClient
// ---------------------------------------------------------------------------

/// Receipt returned by the ledger for an anchor request.
#[derive(Debug, Clone, Deserialize)]
pub struct AnchorReceipt {
    /// Whether the fingerprint was durably committed by the ledger.
    pub committed: bool,
}

/// HTTP client for the external anchoring service.
pub struct LedgerClient {
    client: reqwest::Client,
    config: LedgerConfig,
}

impl LedgerClient {
    /// Create a new client with a pre-configured HTTP transport.
    pub fn new(config: LedgerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Record a 32-byte fingerprint in the ledger.
    pub async fn anchor(&self, fingerprint: &[u8; 32]) -> Result<AnchorReceipt, LedgerError> {
        let url = format!("{}/anchor", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "fingerprint": hex_encode(fingerprint) }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LedgerError::HttpStatus(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    /// Check whether a fingerprint was previously anchored.
    pub async fn verify(&self, fingerprint: &[u8; 32]) -> Result<bool, LedgerError> {
        let url = format!("{}/verify/{}", self.config.base_url, hex_encode(fingerprint));
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(LedgerError::HttpStatus(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }
}

fn hex_encode(bytes: &[u8; 32]) -> String {
    let mut hex = String::with_capacity(64);
    for byte in bytes {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

// ---------------------------------------------------------------------------
// LedgerSink
// ---------------------------------------------------------------------------

/// The ledger sink as seen by the rest of the system.
///
/// Absence is a first-class configuration state checked once at startup.
pub enum LedgerSink {
    Available(LedgerClient),
    Unavailable,
}

impl LedgerSink {
    /// Build the sink from the environment.
    pub fn from_env() -> Self {
        match LedgerConfig::from_env() {
            Some(config) => {
                tracing::info!(url = %config.base_url, "Ledger sink configured");
                Self::Available(LedgerClient::new(config))
            }
            None => {
                tracing::warn!("LEDGER_URL not set, ledger anchoring disabled");
                Self::Unavailable
            }
        }
    }

    /// Anchor a fingerprint, best-effort.
    ///
    /// Called from a detached background task; failures are logged and
    /// swallowed, and the outcome is never observed by the ingestion path.
    pub async fn anchor(&self, fingerprint: &[u8; 32]) {
        match self {
            Self::Available(client) => match client.anchor(fingerprint).await {
                Ok(receipt) => {
                    tracing::info!(committed = receipt.committed, "Fingerprint anchored")
                }
                Err(e) => tracing::error!(error = %e, "Ledger anchoring failed"),
            },
            Self::Unavailable => {
                tracing::debug!("Ledger sink not configured, skipping anchor");
            }
        }
    }

    /// Audit lookup: was this fingerprint anchored?
    ///
    /// Outside the ingestion path; an unconfigured sink is an error the
    /// audit caller must see.
    pub async fn verify(&self, fingerprint: &[u8; 32]) -> Result<bool, LedgerError> {
        match self {
            Self::Available(client) => client.verify(fingerprint).await,
            Self::Unavailable => Err(LedgerError::NotConfigured),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_normalizes_trailing_slash() {
        assert_eq!(
            LedgerConfig::new("http://ledger.local:7545/").base_url,
            "http://ledger.local:7545"
        );
        assert_eq!(
            LedgerConfig::new("http://ledger.local:7545").base_url,
            "http://ledger.local:7545"
        );
    }

    #[test]
    fn hex_encode_is_64_lowercase_chars() {
        let hex = hex_encode(&[0xAB; 32]);
        assert_eq!(hex.len(), 64);
        assert_eq!(&hex[..4], "abab");
    }

    #[test]
    fn ledger_error_display() {
        assert_eq!(
            LedgerError::HttpStatus(503).to_string(),
            "Ledger returned HTTP 503"
        );
        assert_eq!(
            LedgerError::NotConfigured.to_string(),
            "Ledger sink is not configured"
        );
    }

    #[tokio::test]
    async fn unavailable_sink_swallows_anchors() {
        LedgerSink::Unavailable.anchor(&[0u8; 32]).await;
    }

    #[tokio::test]
    async fn unavailable_sink_fails_verification() {
        let result = LedgerSink::Unavailable.verify(&[0u8; 32]).await;
        assert!(matches!(result, Err(LedgerError::NotConfigured)));
    }
}
