//! Test fixtures for route-optimizer.
//!
//! Provides real Tacoma / Puget Sound coordinates for realistic
//! routing tests.

pub mod tacoma_locations;

pub use tacoma_locations::*;
