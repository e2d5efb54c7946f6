//! Data model for optimization requests and results.
//!
//! These are the boundary types exchanged with the API layer; field names
//! serialize in camelCase so request/response bodies pass through unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::error::ValidationError;

/// Default per-route duration cap: an 8-hour working day.
pub const DEFAULT_MAX_ROUTE_TIME_MIN: i64 = 480;

/// Time of day, stored as minutes from midnight, serialized as "HH:MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

#[derive(Debug, Clone, PartialEq, Error)]
#[error("expected time of day as \"HH:MM\", got {input:?}")]
pub struct ClockTimeParseError {
    input: String,
}

impl ClockTime {
    pub fn new(hours: u16, minutes: u16) -> Option<Self> {
        if hours < 24 && minutes < 60 {
            Some(Self(hours * 60 + minutes))
        } else {
            None
        }
    }

    pub fn minutes_from_midnight(self) -> u16 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ClockTimeParseError {
            input: s.to_string(),
        };
        let (hours, minutes) = s.split_once(':').ok_or_else(err)?;
        let hours: u16 = hours.parse().map_err(|_| err())?;
        let minutes: u16 = minutes.parse().map_err(|_| err())?;
        ClockTime::new(hours, minutes).ok_or_else(err)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Scheduling priority of a stop. Higher priority is visited earlier,
/// all else equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Sort rank, lower is more urgent.
    pub(crate) fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// Time-of-day interval within which a stop must be serviced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

/// A point to visit: geocoded upstream, serviced for a known duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    /// Display-only; never used in computation.
    #[serde(default)]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub priority: Priority,
    /// Minutes required on site.
    pub estimated_service_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
}

impl Location {
    pub fn coords(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// A single optimization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptimizationParams {
    pub start_location: Location,
    pub destinations: Vec<Location>,
    /// Maximum stops per route; unlimited when unset.
    #[serde(default)]
    pub vehicle_capacity: Option<usize>,
    /// Maximum total minutes per route.
    #[serde(default = "default_max_route_time")]
    pub max_route_time: i64,
    /// Apply a traffic penalty multiplier to travel estimates.
    #[serde(default = "default_true")]
    pub traffic_consideration: bool,
    /// Schedule windowed stops ahead of unconstrained ones.
    #[serde(default = "default_true")]
    pub prioritize_time_windows: bool,
    /// Clock time at which each route departs the start location.
    #[serde(default = "default_route_start")]
    pub route_start: ClockTime,
}

fn default_max_route_time() -> i64 {
    DEFAULT_MAX_ROUTE_TIME_MIN
}

fn default_true() -> bool {
    true
}

fn default_route_start() -> ClockTime {
    ClockTime::new(8, 0).unwrap()
}

impl RouteOptimizationParams {
    /// Fail-fast input validation; runs before any computation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.destinations.is_empty() {
            return Err(ValidationError::EmptyDestinations);
        }
        if self.max_route_time <= 0 {
            return Err(ValidationError::NonPositiveMaxRouteTime {
                minutes: self.max_route_time,
            });
        }
        if self.vehicle_capacity == Some(0) {
            return Err(ValidationError::ZeroVehicleCapacity);
        }

        check_location(&self.start_location)?;
        for destination in &self.destinations {
            check_location(destination)?;
        }

        Ok(())
    }
}

fn check_location(location: &Location) -> Result<(), ValidationError> {
    let lat_ok = location.latitude.is_finite() && location.latitude.abs() <= 90.0;
    let lng_ok = location.longitude.is_finite() && location.longitude.abs() <= 180.0;
    if !(lat_ok && lng_ok) {
        return Err(ValidationError::InvalidCoordinates {
            id: location.id.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
        });
    }
    if location.estimated_service_time < 0 {
        return Err(ValidationError::NegativeServiceTime {
            id: location.id.clone(),
            minutes: location.estimated_service_time,
        });
    }
    if let Some(window) = &location.time_window {
        if window.end < window.start {
            return Err(ValidationError::InvertedTimeWindow {
                id: location.id.clone(),
            });
        }
    }
    Ok(())
}

/// One technician route: stop IDs in visiting order plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub stops: Vec<String>,
    /// Kilometers traveled.
    pub total_distance: f64,
    /// Minutes from departure to finishing the last stop, waiting included.
    pub total_time: f64,
    /// Fraction of route time spent servicing, in [0, 1].
    pub efficiency: f64,
}

/// Why a stop could not be placed in any route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnroutedReason {
    /// The time window closes before the stop can be reached, even from a
    /// fresh route.
    WindowUnreachable,
    /// Travel, waiting, and service exceed the route time cap from any
    /// fresh route.
    ExceedsRouteTime,
}

/// A stop that no route could absorb. Reported, never dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnroutedStop {
    pub id: String,
    pub reason: UnroutedReason,
}

/// Descriptive run info for the caller's audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    pub algorithm: String,
    /// Wall-clock milliseconds spent optimizing.
    pub processing_time: u64,
}

/// The full optimization response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub routes: Vec<Route>,
    pub unrouted: Vec<UnroutedStop>,
    pub total_distance: f64,
    pub total_time: f64,
    pub metadata: RunMetadata,
}
