//! The vital-sign reading value object.
//!
//! A [`Reading`] is the unit of ingestion: one timestamped sample of heart
//! rate, blood oxygen saturation, and body temperature from the sensor.
//! Readings are immutable once received; every derived value (status,
//! cause, fingerprint) is a pure function of these four fields.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Upper bound for a physically plausible heart rate (beats/min).
pub const MAX_HR_BPM: i32 = 500;

/// Plausible body temperature range in degrees Celsius.
pub const TEMP_RANGE_C: std::ops::RangeInclusive<f64> = 20.0..=50.0;

/// A single vital-sign sample as submitted by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Seconds since the Unix epoch, sub-second precision.
    pub timestamp: f64,
    /// Heart rate in beats per minute.
    pub hr: i32,
    /// Blood oxygen saturation, percent.
    pub spo2: f64,
    /// Body temperature, degrees Celsius.
    pub temp: f64,
}

impl Reading {
    /// Check that all fields are well-formed before any further processing.
    ///
    /// Rejects non-finite floats and values outside physically plausible
    /// ranges. A reading that fails here is never fingerprinted, classified,
    /// or persisted.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.timestamp.is_finite() || self.timestamp <= 0.0 {
            return Err(CoreError::Validation(format!(
                "timestamp must be a positive epoch time, got {}",
                self.timestamp
            )));
        }
        if !(0..=MAX_HR_BPM).contains(&self.hr) {
            return Err(CoreError::Validation(format!(
                "hr must be between 0 and {MAX_HR_BPM} bpm, got {}",
                self.hr
            )));
        }
        if !self.spo2.is_finite() || !(0.0..=100.0).contains(&self.spo2) {
            return Err(CoreError::Validation(format!(
                "spo2 must be between 0 and 100 percent, got {}",
                self.spo2
            )));
        }
        if !self.temp.is_finite() || !TEMP_RANGE_C.contains(&self.temp) {
            return Err(CoreError::Validation(format!(
                "temp must be between {} and {} degrees Celsius, got {}",
                TEMP_RANGE_C.start(),
                TEMP_RANGE_C.end(),
                self.temp
            )));
        }
        Ok(())
    }
}
