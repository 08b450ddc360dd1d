//! VitalWatch API server library.
//!
//! Exposes the building blocks (config, state, error handling, the
//! ingestion pipeline, routes, WebSocket infrastructure) so integration
//! tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod ws;
