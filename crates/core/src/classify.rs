//! Threshold classification of vital-sign readings.
//!
//! Rules are evaluated in fixed priority order and the first breach wins:
//! heart rate, then oxygen saturation, then temperature. When several
//! thresholds are breached at once, only the highest-priority cause is
//! reported. The order is observable behaviour, not an implementation
//! detail.

use serde::{Deserialize, Serialize};

use crate::reading::Reading;

/// Heart rate above this is a fatal spike (beats/min).
pub const HR_SPIKE_BPM: i32 = 120;

/// Oxygen saturation below this is a fatal drop (percent).
pub const SPO2_DROP_PCT: f64 = 88.0;

/// Temperature above this is a fatal fever (degrees Celsius).
pub const FEVER_TEMP_C: f64 = 39.0;

/// Cause string reported for a heart rate breach.
pub const CAUSE_HR_SPIKE: &str = "Heart rate spike detected";

/// Cause string reported for an oxygen saturation breach.
pub const CAUSE_SPO2_DROP: &str = "Severe oxygen drop detected";

/// Cause string reported for a temperature breach.
pub const CAUSE_FEVER: &str = "High fever detected";

/// Outcome status of a classified reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    Normal,
    Fatal,
}

impl VitalStatus {
    /// The lowercase wire/storage form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            VitalStatus::Normal => "normal",
            VitalStatus::Fatal => "fatal",
        }
    }
}

impl std::fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: VitalStatus,
    /// Set iff `status` is [`VitalStatus::Fatal`].
    pub cause: Option<&'static str>,
}

/// Apply the ordered threshold rules to a reading.
///
/// Pure function: no side effects, no error conditions.
pub fn classify(reading: &Reading) -> Classification {
    let cause = if reading.hr > HR_SPIKE_BPM {
        Some(CAUSE_HR_SPIKE)
    } else if reading.spo2 < SPO2_DROP_PCT {
        Some(CAUSE_SPO2_DROP)
    } else if reading.temp > FEVER_TEMP_C {
        Some(CAUSE_FEVER)
    } else {
        None
    };

    Classification {
        status: if cause.is_some() {
            VitalStatus::Fatal
        } else {
            VitalStatus::Normal
        },
        cause,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn reading(hr: i32, spo2: f64, temp: f64) -> Reading {
        Reading {
            timestamp: 1_700_000_000.0,
            hr,
            spo2,
            temp,
        }
    }

    #[test]
    fn nominal_vitals_are_normal() {
        let c = classify(&reading(100, 95.0, 37.0));
        assert_matches!(c.status, VitalStatus::Normal);
        assert_eq!(c.cause, None);
    }

    #[test]
    fn heart_rate_spike_is_fatal() {
        let c = classify(&reading(125, 95.0, 37.0));
        assert_matches!(c.status, VitalStatus::Fatal);
        assert_eq!(c.cause, Some(CAUSE_HR_SPIKE));
    }

    #[test]
    fn oxygen_drop_is_fatal() {
        let c = classify(&reading(90, 85.0, 37.0));
        assert_matches!(c.status, VitalStatus::Fatal);
        assert_eq!(c.cause, Some(CAUSE_SPO2_DROP));
    }

    #[test]
    fn fever_is_fatal() {
        let c = classify(&reading(90, 95.0, 39.5));
        assert_matches!(c.status, VitalStatus::Fatal);
        assert_eq!(c.cause, Some(CAUSE_FEVER));
    }

    #[test]
    fn heart_rate_rule_wins_over_all_others() {
        // All three thresholds breached at once: rule 1 must be reported.
        let c = classify(&reading(130, 80.0, 40.0));
        assert_matches!(c.status, VitalStatus::Fatal);
        assert_eq!(c.cause, Some(CAUSE_HR_SPIKE));
    }

    #[test]
    fn oxygen_rule_wins_over_fever() {
        let c = classify(&reading(90, 80.0, 40.0));
        assert_eq!(c.cause, Some(CAUSE_SPO2_DROP));
    }

    #[test]
    fn thresholds_are_exclusive_bounds() {
        // Values exactly at a threshold do not trip the rule.
        assert_eq!(classify(&reading(120, 95.0, 37.0)).cause, None);
        assert_eq!(classify(&reading(100, 88.0, 37.0)).cause, None);
        assert_eq!(classify(&reading(100, 95.0, 39.0)).cause, None);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&VitalStatus::Fatal).unwrap(),
            "\"fatal\""
        );
        assert_eq!(VitalStatus::Normal.to_string(), "normal");
    }
}
