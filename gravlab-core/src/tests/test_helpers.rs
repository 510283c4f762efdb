//! Test helper utilities for gravlab tests

use crate::engine::{Body, Rgba, SimulationState};
use glam::DVec2;

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Check if two vectors are approximately equal component-wise
pub fn approx_eq_vec(a: DVec2, b: DVec2, tol: f64) -> bool {
    approx_eq(a.x, b.x, tol) && approx_eq(a.y, b.y, tol)
}

/// A white body with the given position, velocity and mass
pub fn body(x: f64, y: f64, vx: f64, vy: f64, mass: f64) -> Body {
    Body::new(DVec2::new(x, y), DVec2::new(vx, vy), mass, Rgba::opaque(255, 255, 255))
}

/// Two bodies of mass 10 at rest, 10 units apart on the x axis
pub fn two_body_state() -> SimulationState {
    SimulationState::new(vec![
        body(0.0, 0.0, 0.0, 0.0, 10.0),
        body(10.0, 0.0, 0.0, 0.0, 10.0),
    ])
    .expect("two-body configuration is valid")
}

/// A single body drifting with constant velocity
pub fn single_body_state(x: f64, y: f64, vx: f64, vy: f64) -> SimulationState {
    SimulationState::new(vec![body(x, y, vx, vy, 5.0)]).expect("single body is valid")
}

/// Position and velocity of every body, for exact comparisons
pub fn snapshot(state: &SimulationState) -> Vec<(DVec2, DVec2)> {
    state.bodies().iter().map(|b| (b.pos, b.vel)).collect()
}

/// Check whether every coordinate of every body is finite
pub fn all_finite(state: &SimulationState) -> bool {
    state
        .bodies()
        .iter()
        .all(|b| b.pos.is_finite() && b.vel.is_finite())
}
