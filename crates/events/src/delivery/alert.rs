//! Telegram messaging alert for fatal readings.
//!
//! [`TelegramAlert`] delivers a formatted text notification via the bot
//! `sendMessage` endpoint. Configuration is loaded from environment
//! variables; if `TELEGRAM_BOT_TOKEN` or `TELEGRAM_CHAT_ID` is not set,
//! [`AlertConfig::from_env`] returns `None` and the sink is
//! [`AlertSink::Unavailable`]. Delivery is strictly fire-and-forget: one
//! attempt, failures logged, no retry.

use std::time::Duration;

use chrono::Utc;

use crate::event::VitalEvent;

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for alert delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The messaging API returned a non-2xx status code.
    #[error("Alert endpoint returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Configuration for the Telegram alert sink.
#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Bot API token.
    pub bot_token: String,
    /// Target chat id.
    pub chat_id: String,
}

impl AlertConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` unless both variables are set, signalling that the
    /// alert sink is not configured.
    ///
    /// | Variable             | Required |
    /// |----------------------|----------|
    /// | `TELEGRAM_BOT_TOKEN` | yes      |
    /// | `TELEGRAM_CHAT_ID`   | yes      |
    pub fn from_env() -> Option<Self> {
        Some(Self {
            bot_token: std::env::var("TELEGRAM_BOT_TOKEN").ok()?,
            chat_id: std::env::var("TELEGRAM_CHAT_ID").ok()?,
        })
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Render the fatal-alert notification text for an event.
///
/// Contains the heart rate, oxygen saturation, temperature, cause, and a
/// wall-clock timestamp.
pub fn format_alert(event: &VitalEvent) -> String {
    format!(
        "*VitalWatch fatal alert*\n\
         HR: {} bpm\n\
         SpO2: {}%\n\
         Temp: {}\u{b0}C\n\
         Cause: {}\n\
         Time: {}",
        event.hr,
        event.spo2,
        event.temp,
        event.cause.as_deref().unwrap_or("unknown"),
        Utc::now().format("%H:%M:%S"),
    )
}

// ---------------------------------------------------------------------------
// TelegramAlert
// ---------------------------------------------------------------------------

/// Delivers alert text to a Telegram chat.
pub struct TelegramAlert {
    client: reqwest::Client,
    config: AlertConfig,
}

impl TelegramAlert {
    /// Create a new delivery service with a pre-configured HTTP client.
    pub fn new(config: AlertConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Execute a single `sendMessage` call and check the response status.
    pub async fn send(&self, text: &str) -> Result<(), AlertError> {
        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.config.bot_token
        );
        let response = self
            .client
            .post(&url)
            .form(&[
                ("chat_id", self.config.chat_id.as_str()),
                ("text", text),
                ("parse_mode", "Markdown"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AlertError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// AlertSink
// ---------------------------------------------------------------------------

/// The alert sink as seen by the ingestion pipeline.
///
/// Absence of configuration is a first-class state checked once at
/// startup, not an error path per call.
pub enum AlertSink {
    Available(TelegramAlert),
    Unavailable,
}

impl AlertSink {
    /// Build the sink from the environment.
    pub fn from_env() -> Self {
        match AlertConfig::from_env() {
            Some(config) => {
                tracing::info!("Alert sink configured (Telegram)");
                Self::Available(TelegramAlert::new(config))
            }
            None => {
                tracing::warn!("TELEGRAM_BOT_TOKEN/TELEGRAM_CHAT_ID not set, alert sink disabled");
                Self::Unavailable
            }
        }
    }

    /// Deliver a notification, best-effort.
    ///
    /// Failures are logged and swallowed; the outcome is never observed by
    /// the ingestion path.
    pub async fn notify(&self, text: &str) {
        match self {
            Self::Available(telegram) => match telegram.send(text).await {
                Ok(()) => tracing::debug!("Alert delivered"),
                Err(e) => tracing::error!(error = %e, "Alert delivery failed"),
            },
            Self::Unavailable => {
                tracing::debug!("Alert sink not configured, skipping notification");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
