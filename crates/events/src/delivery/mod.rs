//! External delivery sinks for fatal readings.
//!
//! This module provides the messaging alert and ledger-anchoring services
//! the ingestion pipeline dispatches to in the background. Sink failures
//! are logged and never retried or surfaced to the submitter.

pub mod alert;
pub mod ledger;
