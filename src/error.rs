//! Validation errors for optimizer input.
//!
//! Validation fails fast before any computation; there are no partial
//! results. Infeasibility of individual stops is not an error — it is
//! reported inside the result (see [`crate::types::UnroutedStop`]).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("destinations must not be empty")]
    EmptyDestinations,

    #[error("location `{id}` has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        id: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("location `{id}` has negative estimated service time ({minutes} min)")]
    NegativeServiceTime { id: String, minutes: i64 },

    #[error("location `{id}` has a time window that ends before it starts")]
    InvertedTimeWindow { id: String },

    #[error("maxRouteTime must be positive, got {minutes}")]
    NonPositiveMaxRouteTime { minutes: i64 },

    #[error("vehicleCapacity must be at least 1 when set")]
    ZeroVehicleCapacity,
}
