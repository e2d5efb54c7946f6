//! route-optimizer core
//!
//! Computes technician visiting orders across geographically distributed
//! stops, subject to time windows, per-route capacity, and a maximum route
//! duration. Pure in-memory computation; the caller owns persistence and
//! transport.

pub mod error;
pub mod estimate;
pub mod optimizer;
pub mod types;
