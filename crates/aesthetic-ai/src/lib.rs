//! Deterministic scoring core for the aesthetic-medicine provider dashboard.
//!
//! Everything here is a pure function of its arguments: the engines hold only
//! immutable configuration loaded once at startup. All I/O (record-store
//! fetches, payload persistence, external narrative enrichment) belongs to
//! calling code.

pub mod assessment;
pub mod config;
pub mod error;
pub mod intake;
pub mod narrative;
pub mod normalize;
pub mod quiz;
pub mod telemetry;
