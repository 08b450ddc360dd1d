//! The enriched vital event envelope.
//!
//! A [`VitalEvent`] is produced by the ingestion pipeline once a reading
//! has been classified and durably recorded. It carries everything the
//! fan-out paths need: the raw reading fields, the derived status and
//! cause, and the fingerprint. Cloneable so it can move into detached sink
//! tasks.

use serde::{Deserialize, Serialize};
use vitalwatch_core::classify::{Classification, VitalStatus};
use vitalwatch_core::fingerprint::Fingerprint;
use vitalwatch_core::reading::Reading;

/// A classified, persisted reading ready for fan-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalEvent {
    pub timestamp: f64,
    pub hr: i32,
    pub spo2: f64,
    pub temp: f64,
    pub status: VitalStatus,
    pub cause: Option<String>,
    /// 64-char lowercase hex fingerprint.
    pub fingerprint: String,
}

impl VitalEvent {
    /// Build the envelope from the pipeline's intermediate values.
    pub fn new(reading: &Reading, classification: &Classification, fingerprint: &Fingerprint) -> Self {
        Self {
            timestamp: reading.timestamp,
            hr: reading.hr,
            spo2: reading.spo2,
            temp: reading.temp,
            status: classification.status,
            cause: classification.cause.map(str::to_owned),
            fingerprint: fingerprint.to_hex(),
        }
    }

    /// The JSON message pushed to live dashboard observers:
    /// `{"data": {reading fields + cause}, "status": ...}`.
    pub fn dashboard_message(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "timestamp": self.timestamp,
                "hr": self.hr,
                "spo2": self.spo2,
                "temp": self.temp,
                "cause": self.cause,
            },
            "status": self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use vitalwatch_core::classify::classify;

    use super::*;

    fn event(hr: i32, spo2: f64, temp: f64) -> VitalEvent {
        let reading = Reading {
            timestamp: 1_700_000_000.0,
            hr,
            spo2,
            temp,
        };
        VitalEvent::new(&reading, &classify(&reading), &Fingerprint::of(&reading))
    }

    #[test]
    fn carries_classification_and_fingerprint() {
        let e = event(125, 95.0, 37.0);
        assert_eq!(e.status, VitalStatus::Fatal);
        assert_eq!(e.cause.as_deref(), Some("Heart rate spike detected"));
        assert_eq!(e.fingerprint.len(), 64);
    }

    #[test]
    fn dashboard_message_shape() {
        let msg = event(100, 95.0, 37.0).dashboard_message();
        assert_eq!(msg["status"], "normal");
        assert_eq!(msg["data"]["hr"], 100);
        assert_eq!(msg["data"]["spo2"], 95.0);
        assert_eq!(msg["data"]["temp"], 37.0);
        assert!(msg["data"]["cause"].is_null());
        // The fingerprint is not part of the dashboard payload.
        assert!(msg["data"].get("fingerprint").is_none());
    }

    #[test]
    fn dashboard_message_includes_cause_when_fatal() {
        let msg = event(90, 80.0, 37.0).dashboard_message();
        assert_eq!(msg["status"], "fatal");
        assert_eq!(msg["data"]["cause"], "Severe oxygen drop detected");
    }
}
