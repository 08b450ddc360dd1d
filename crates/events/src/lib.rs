//! VitalWatch fan-out events and external delivery sinks.
//!
//! This crate provides the building blocks downstream of a committed
//! reading:
//!
//! - [`VitalEvent`] — the enriched event envelope broadcast to live
//!   observers and handed to the sinks.
//! - [`delivery::alert`] — Telegram messaging alert for fatal readings.
//! - [`delivery::ledger`] — anchoring of reading fingerprints in the
//!   external tamper-evident ledger.
//!
//! Both sinks express absence of configuration as a first-class state
//! ([`AlertSink::Unavailable`], [`LedgerSink::Unavailable`]) decided once
//! at startup.

pub mod delivery;
pub mod event;

pub use delivery::alert::{AlertConfig, AlertSink, TelegramAlert};
pub use delivery::ledger::{AnchorReceipt, LedgerClient, LedgerConfig, LedgerError, LedgerSink};
pub use event::VitalEvent;
