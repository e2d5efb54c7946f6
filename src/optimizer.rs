//! Route construction heuristic.
//!
//! Nearest-neighbor with priority and time-window adjustment: greedy and
//! deterministic rather than globally optimal, which is the right trade at
//! tens of stops per day. Each step scans the remaining candidates for the
//! closest feasible one, so a run is O(n²) in the destination count.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::ValidationError;
use crate::estimate::{HaversineEstimator, Leg, TravelEstimator};
use crate::types::{
    Location, OptimizationResult, Route, RouteOptimizationParams, RunMetadata, UnroutedReason,
    UnroutedStop,
};

/// Algorithm identifier stamped into result metadata.
pub const ALGORITHM_NAME: &str = "nearest-neighbor-priority-tw";

/// In-progress route accumulator.
#[derive(Debug, Clone)]
struct RouteState {
    position: (f64, f64),
    /// Minutes since departing the start location, waiting included.
    elapsed: f64,
    distance_km: f64,
    service_minutes: f64,
    stops: Vec<String>,
}

impl RouteState {
    fn fresh(start: (f64, f64)) -> Self {
        Self {
            position: start,
            elapsed: 0.0,
            distance_km: 0.0,
            service_minutes: 0.0,
            stops: Vec::new(),
        }
    }

    fn into_route(self) -> Route {
        let efficiency = efficiency(self.service_minutes, self.elapsed);
        Route {
            stops: self.stops,
            total_distance: self.distance_km,
            total_time: self.elapsed,
            efficiency,
        }
    }
}

/// A feasible insertion of one stop at the end of the current route.
#[derive(Debug, Clone, Copy)]
struct Placement {
    leg: Leg,
    /// Route elapsed time after servicing the stop, waiting included.
    elapsed_after: f64,
}

/// Optimize with the production haversine estimator.
pub fn optimize(params: &RouteOptimizationParams) -> Result<OptimizationResult, ValidationError> {
    let estimator = HaversineEstimator::new(params.traffic_consideration);
    optimize_with(params, &estimator)
}

/// Optimize with a caller-supplied travel estimator.
pub fn optimize_with<E: TravelEstimator>(
    params: &RouteOptimizationParams,
    estimator: &E,
) -> Result<OptimizationResult, ValidationError> {
    let started = Instant::now();
    params.validate()?;

    let mut remaining = candidate_pool(params);
    debug!(
        destinations = remaining.len(),
        vehicle_capacity = ?params.vehicle_capacity,
        max_route_time = params.max_route_time,
        prioritize_time_windows = params.prioritize_time_windows,
        "starting route optimization"
    );

    let start = params.start_location.coords();
    let day_start = f64::from(params.route_start.minutes_from_midnight());
    let max_route_time = params.max_route_time as f64;

    let mut routes: Vec<Route> = Vec::new();
    let mut unrouted: Vec<UnroutedStop> = Vec::new();

    while !remaining.is_empty() {
        let mut state = RouteState::fresh(start);

        loop {
            if at_capacity(&state, params.vehicle_capacity) {
                break;
            }
            let Some((index, placement)) = select_next(
                &state,
                &remaining,
                params.prioritize_time_windows,
                day_start,
                max_route_time,
                estimator,
            ) else {
                break;
            };
            let stop = remaining.remove(index);
            state.distance_km += placement.leg.distance_km;
            state.service_minutes += stop.estimated_service_time as f64;
            state.elapsed = placement.elapsed_after;
            state.position = stop.coords();
            state.stops.push(stop.id.clone());
        }

        if state.stops.is_empty() {
            // A fresh route placed nothing: whatever is left can never fit.
            for stop in remaining.drain(..) {
                unrouted.push(UnroutedStop {
                    id: stop.id.clone(),
                    reason: unrouted_reason(stop, start, day_start, estimator),
                });
            }
            break;
        }

        routes.push(state.into_route());
    }

    let total_distance = routes.iter().map(|route| route.total_distance).sum();
    let total_time = routes.iter().map(|route| route.total_time).sum();

    info!(
        routes = routes.len(),
        unrouted = unrouted.len(),
        total_distance_km = total_distance,
        total_time_min = total_time,
        "route optimization finished"
    );

    Ok(OptimizationResult {
        routes,
        unrouted,
        total_distance,
        total_time,
        metadata: RunMetadata {
            algorithm: ALGORITHM_NAME.to_string(),
            processing_time: started.elapsed().as_millis() as u64,
        },
    })
}

/// Dedupe by id (first occurrence wins) and order the candidate pool.
///
/// Windowed stops sort ahead of unconstrained ones when requested; within
/// each class higher priority sorts first and input order is preserved.
fn candidate_pool(params: &RouteOptimizationParams) -> Vec<&Location> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pool: Vec<&Location> = Vec::new();
    for destination in &params.destinations {
        if seen.insert(destination.id.as_str()) {
            pool.push(destination);
        }
    }

    if params.prioritize_time_windows {
        pool.sort_by_key(|stop| (stop.time_window.is_none(), stop.priority.rank()));
    } else {
        pool.sort_by_key(|stop| stop.priority.rank());
    }

    pool
}

fn at_capacity(state: &RouteState, vehicle_capacity: Option<usize>) -> bool {
    vehicle_capacity.is_some_and(|capacity| state.stops.len() >= capacity)
}

/// Pick the nearest feasible candidate by travel time; ties go to the
/// higher-priority stop, then to pool order.
///
/// When `windowed_first` is set, feasible windowed stops are exhausted
/// before any unconstrained stop is considered.
fn select_next<E: TravelEstimator>(
    state: &RouteState,
    remaining: &[&Location],
    windowed_first: bool,
    day_start: f64,
    max_route_time: f64,
    estimator: &E,
) -> Option<(usize, Placement)> {
    if windowed_first {
        let windowed = scan_candidates(state, remaining, true, day_start, max_route_time, estimator);
        if windowed.is_some() {
            return windowed;
        }
    }
    scan_candidates(state, remaining, false, day_start, max_route_time, estimator)
}

fn scan_candidates<E: TravelEstimator>(
    state: &RouteState,
    remaining: &[&Location],
    windowed_only: bool,
    day_start: f64,
    max_route_time: f64,
    estimator: &E,
) -> Option<(usize, Placement)> {
    let mut best: Option<(usize, Placement, u8)> = None;

    for (index, stop) in remaining.iter().enumerate() {
        if windowed_only && stop.time_window.is_none() {
            continue;
        }
        let Some(placement) = try_place(stop, state, day_start, max_route_time, estimator) else {
            continue;
        };
        let rank = stop.priority.rank();
        let better = match &best {
            None => true,
            Some((_, incumbent, incumbent_rank)) => {
                placement.leg.travel_minutes < incumbent.leg.travel_minutes
                    || (placement.leg.travel_minutes == incumbent.leg.travel_minutes
                        && rank < *incumbent_rank)
            }
        };
        if better {
            best = Some((index, placement, rank));
        }
    }

    best.map(|(index, placement, _)| (index, placement))
}

/// Check whether appending `stop` to the route is feasible, and if so
/// project the route's elapsed time after servicing it.
///
/// Arrival ahead of a window opening waits; the wait counts toward route
/// time. Arrival after the window close is infeasible.
fn try_place<E: TravelEstimator>(
    stop: &Location,
    state: &RouteState,
    day_start: f64,
    max_route_time: f64,
    estimator: &E,
) -> Option<Placement> {
    let leg = estimator.estimate(state.position, stop.coords());
    let arrival = day_start + state.elapsed + leg.travel_minutes;

    let service_start = match &stop.time_window {
        Some(window) => {
            let opens = f64::from(window.start.minutes_from_midnight());
            let closes = f64::from(window.end.minutes_from_midnight());
            if arrival > closes {
                return None;
            }
            arrival.max(opens)
        }
        None => arrival,
    };

    let elapsed_after = service_start + stop.estimated_service_time as f64 - day_start;
    if elapsed_after > max_route_time {
        return None;
    }

    Some(Placement { leg, elapsed_after })
}

/// Classify why a stop cannot fit even a fresh route.
fn unrouted_reason<E: TravelEstimator>(
    stop: &Location,
    start: (f64, f64),
    day_start: f64,
    estimator: &E,
) -> UnroutedReason {
    let leg = estimator.estimate(start, stop.coords());
    let arrival = day_start + leg.travel_minutes;
    if let Some(window) = &stop.time_window {
        if arrival > f64::from(window.end.minutes_from_midnight()) {
            return UnroutedReason::WindowUnreachable;
        }
    }
    UnroutedReason::ExceedsRouteTime
}

/// Fraction of route time spent servicing rather than traveling or
/// waiting, clamped to [0, 1]. Reporting only.
fn efficiency(service_minutes: f64, total_minutes: f64) -> f64 {
    if total_minutes <= 0.0 {
        return 0.0;
    }
    (service_minutes / total_minutes).clamp(0.0, 1.0)
}
