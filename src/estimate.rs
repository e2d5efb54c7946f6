//! Travel estimation between stops.
//!
//! Uses great-circle distance and an assumed average speed. Ignores the
//! road network, but needs no external routing engine and is symmetric
//! and deterministic.

/// Assumed average driving speed for time estimation.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Travel-time penalty applied when traffic consideration is on.
const TRAFFIC_MULTIPLIER: f64 = 1.3;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Estimated travel between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub distance_km: f64,
    pub travel_minutes: f64,
}

/// Estimates travel legs between coordinate pairs (lat, lng).
///
/// Assumes valid coordinates; inputs are validated at the optimizer
/// boundary before any estimation happens.
pub trait TravelEstimator {
    fn estimate(&self, from: (f64, f64), to: (f64, f64)) -> Leg;
}

/// Haversine-based travel estimator.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
    /// Whether to apply the traffic penalty multiplier.
    pub traffic: bool,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            traffic: true,
        }
    }
}

impl HaversineEstimator {
    pub fn new(traffic: bool) -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            traffic,
        }
    }

    pub fn with_speed(speed_kmh: f64, traffic: bool) -> Self {
        Self { speed_kmh, traffic }
    }

    /// Great-circle distance between two points in kilometers.
    fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

impl TravelEstimator for HaversineEstimator {
    fn estimate(&self, from: (f64, f64), to: (f64, f64)) -> Leg {
        let distance_km = Self::haversine_km(from, to);
        let mut travel_minutes = distance_km / self.speed_kmh * 60.0;
        if self.traffic {
            travel_minutes *= TRAFFIC_MULTIPLIER;
        }
        Leg {
            distance_km,
            travel_minutes,
        }
    }
}
