//! VitalWatch domain types and pure pipeline stages.
//!
//! Everything in this crate is side-effect free: the [`Reading`] value
//! object and its validation, the threshold [`classify`] rules, and the
//! canonical [`Fingerprint`] computation. The api crate wires these into
//! the ingestion pipeline; the db crate persists their results.
//!
//! [`Reading`]: reading::Reading
//! [`classify`]: classify::classify
//! [`Fingerprint`]: fingerprint::Fingerprint

pub mod classify;
pub mod error;
pub mod fingerprint;
pub mod reading;
pub mod types;

pub use classify::{classify, Classification, VitalStatus};
pub use error::CoreError;
pub use fingerprint::Fingerprint;
pub use reading::Reading;
