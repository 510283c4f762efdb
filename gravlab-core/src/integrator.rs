use crate::engine::SimulationState;
use crate::params::Params;

/// Step the simulation forward one tick using semi-implicit Euler integration
pub fn step(state: &mut SimulationState, params: &Params) {
    debug_assert!(params.softening > 0.0, "softening must be positive");
    let dt = params.time_step;

    // All accelerations come from the pre-tick positions
    let accelerations: Vec<_> = (0..state.len())
        .map(|i| state.acceleration(i, params))
        .collect();

    for (body, accel) in state.bodies_mut().iter_mut().zip(&accelerations) {
        body.vel += *accel * dt;
    }

    // Positions move with the velocities just updated
    for body in state.bodies_mut() {
        body.pos += body.vel * dt;
    }

    state.ticks += 1;
}
