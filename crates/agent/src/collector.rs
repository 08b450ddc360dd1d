//! Synthetic vital-sign generation.
//!
//! Produces randomized but physiologically plausible readings. The ranges
//! intentionally straddle the fatal thresholds so that a running agent
//! exercises both the normal and the alerting paths of the backend.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use vitalwatch_core::reading::Reading;

/// Heart rate range of the simulated patient (beats/min).
pub const HR_RANGE: std::ops::RangeInclusive<i32> = 60..=140;

/// Oxygen saturation range (percent).
pub const SPO2_RANGE: std::ops::Range<f64> = 85.0..100.0;

/// Body temperature range (degrees Celsius).
pub const TEMP_RANGE: std::ops::Range<f64> = 36.0..40.5;

/// Generates synthetic readings stamped with the current wall clock.
pub struct ReadingGenerator;

impl ReadingGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Produce one randomized reading.
    pub fn generate(&self) -> Reading {
        let mut rng = rand::rng();

        Reading {
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs_f64())
                .unwrap_or_default(),
            hr: rng.random_range(HR_RANGE),
            spo2: round_tenths(rng.random_range(SPO2_RANGE)),
            temp: round_tenths(rng.random_range(TEMP_RANGE)),
        }
    }
}

impl Default for ReadingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sensors report one decimal of precision.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
