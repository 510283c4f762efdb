//! Read-only projections of the state for a renderer

use crate::engine::{Rgba, SimulationState};
use crate::params::Params;
use std::fmt::Write;

pub const CONTROLS_HELP: &str = "Controls:\n\
[1][2][3] = Select body\n\
Arrows = Change velocity\n\
WASD = Change position\n\
P = Pause, O = Resume, R = Reset\n\n";

/// A filled square whose top-left corner sits at the body's position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRequest {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Rgba,
}

/// One square per body, in body order
pub fn draw_list(state: &SimulationState, params: &Params) -> Vec<DrawRequest> {
    state
        .bodies()
        .iter()
        .map(|b| DrawRequest {
            x: b.pos.x,
            y: b.pos.y,
            size: params.body_size,
            color: b.color,
        })
        .collect()
}

/// Multi-line status: controls help, one line per body, run state
pub fn status_text(state: &SimulationState) -> String {
    let mut info = String::from(CONTROLS_HELP);

    for (i, b) in state.bodies().iter().enumerate() {
        let tag = if i == state.selected() {
            " <- selected"
        } else {
            ""
        };
        // Writing to a String cannot fail
        let _ = writeln!(
            info,
            "Body {}: x={:.2} y={:.2} vx={:.2} vy={:.2}{}",
            i + 1,
            b.pos.x,
            b.pos.y,
            b.vel.x,
            b.vel.y,
            tag
        );
    }

    if state.paused {
        info.push_str("\nSimulation: PAUSED");
    } else {
        info.push_str("\nSimulation: RUNNING");
    }

    info
}
