//! Canonical reading fingerprints.
//!
//! A [`Fingerprint`] is the SHA-256 digest of a reading's canonical JSON
//! serialization. The canonical form is the contract that makes
//! fingerprints reproducible across process restarts and across
//! reimplementations: a compact JSON object whose keys appear in ascending
//! lexicographic order (`hr`, `spo2`, `temp`, `timestamp`), integers
//! without a decimal point, floats in their shortest round-trip decimal
//! form. Identical readings always fingerprint identically.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::CoreError;
use crate::reading::Reading;

/// Field order here defines the canonical key order. Do not reorder.
#[derive(Serialize)]
struct CanonicalReading {
    hr: i32,
    spo2: f64,
    temp: f64,
    timestamp: f64,
}

/// Serialize a reading into its canonical byte form.
pub fn canonical_json(reading: &Reading) -> String {
    serde_json::to_string(&CanonicalReading {
        hr: reading.hr,
        spo2: reading.spo2,
        temp: reading.temp,
        timestamp: reading.timestamp,
    })
    .expect("canonical reading serialization cannot fail")
}

/// A 256-bit content hash of a reading's canonical serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Compute the fingerprint of a reading. Pure and total.
    pub fn of(reading: &Reading) -> Self {
        let digest = Sha256::digest(canonical_json(reading).as_bytes());
        Self(digest.into())
    }

    /// The raw 32-byte digest, as required by the ledger sink.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding, 64 characters.
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(64);
        for byte in self.0 {
            hex.push_str(&format!("{byte:02x}"));
        }
        hex
    }

    /// Parse a hex-encoded fingerprint, as submitted on the audit path.
    ///
    /// Accepts an optional `0x` prefix and either letter case; anything
    /// that is not exactly 32 hex-encoded bytes is a validation error.
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        if hex.len() != 64 {
            return Err(CoreError::Validation(format!(
                "fingerprint must be 64 hex characters, got {}",
                hex.len()
            )));
        }

        let mut bytes = [0u8; 32];
        for (i, chunk) in hex.as_bytes().chunks_exact(2).enumerate() {
            let pair = std::str::from_utf8(chunk)
                .map_err(|_| CoreError::Validation("fingerprint is not valid hex".into()))?;
            bytes[i] = u8::from_str_radix(pair, 16)
                .map_err(|_| CoreError::Validation("fingerprint is not valid hex".into()))?;
        }
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
