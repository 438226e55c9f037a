//! Shared types for the earning agent
//!
//! Contains the types that cross module boundaries: upstream failure
//! taxonomy, telemetry/status payloads served by the dashboard, and the
//! tracing setup used by the agent binary and its tests.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::ApiFailure;
pub use types::*;
