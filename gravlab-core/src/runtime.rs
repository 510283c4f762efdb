//! Per-tick controller: operator controls first, then physics

use crate::engine::SimulationState;
use crate::input::{Action, Direction, InputSource};
use crate::integrator::step;
use crate::params::Params;

/// Apply this tick's held controls.
///
/// Precedence is fixed: pause, resume, reset, selection, then the
/// directional effects on whichever body is selected after that. Controls
/// apply whether or not the simulation is paused.
pub fn apply_controls<I: InputSource + ?Sized>(
    state: &mut SimulationState,
    input: &I,
    params: &Params,
) {
    if input.is_active(Action::Pause) {
        state.paused = true;
    }
    // Evaluated after pause so holding both resumes
    if input.is_active(Action::Resume) {
        state.paused = false;
    }
    if input.is_active(Action::Reset) {
        state.reset();
    }

    for index in 0..state.len() {
        if input.is_active(Action::Select(index)) {
            state.select(index);
        }
    }

    let velocity_step = params.velocity_step;
    let position_step = params.position_step;
    let selected = state.selected();
    let body = state.selected_body_mut();

    for direction in Direction::ALL {
        if input.is_active(Action::Nudge(direction)) {
            match direction {
                Direction::Up => body.vel.y -= velocity_step,
                Direction::Down => body.vel.y += velocity_step,
                Direction::Left => body.vel.x -= velocity_step,
                Direction::Right => body.vel.x += velocity_step,
            }
            log::trace!("nudge body {} {:?}", selected, direction);
        }
    }

    for direction in Direction::ALL {
        if input.is_active(Action::Move(direction)) {
            match direction {
                Direction::Up => body.pos.y -= position_step,
                Direction::Down => body.pos.y += position_step,
                Direction::Left => body.pos.x -= position_step,
                Direction::Right => body.pos.x += position_step,
            }
            log::trace!("move body {} {:?}", selected, direction);
        }
    }
}

/// One full tick: controls, then integration unless paused.
pub fn tick<I: InputSource + ?Sized>(state: &mut SimulationState, input: &I, params: &Params) {
    apply_controls(state, input, params);
    if !state.paused {
        step(state, params);
    }
}

/// Run `ticks` ticks against the same input snapshot.
pub fn run_ticks<I: InputSource + ?Sized>(
    state: &mut SimulationState,
    input: &I,
    params: &Params,
    ticks: usize,
) {
    for _ in 0..ticks {
        tick(state, input, params);
    }
}
