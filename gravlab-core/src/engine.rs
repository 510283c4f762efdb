use crate::params::Params;
use crate::scenario::reference_bodies;
use glam::DVec2;
use thiserror::Error;

/// Display colour of a body. The core never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A point mass in the simulation
///
/// Mass is fixed at construction; only position and velocity change.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    mass: f64,
    pub color: Rgba,
}

impl Body {
    pub fn new(pos: DVec2, vel: DVec2, mass: f64, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            mass,
            color,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }
}

/// Error building a simulation from an initial configuration
#[derive(Debug, Error, PartialEq)]
pub enum StateError {
    #[error("a simulation needs at least one body")]
    Empty,
    #[error("body {index} has mass {mass}; masses must be finite and positive")]
    InvalidMass { index: usize, mass: f64 },
}

/// Everything the stepper owns: the bodies, the pause flag and the selection.
///
/// The body count is fixed at construction. Bodies are only handed out as
/// slices, so nothing can grow or shrink the collection afterwards.
#[derive(Debug, Clone)]
pub struct SimulationState {
    bodies: Vec<Body>,
    initial: Vec<Body>,
    pub paused: bool,
    selected: usize,
    /// Integration steps performed since the last reset
    pub ticks: u64,
}

impl SimulationState {
    /// Build a simulation that resets to `bodies`.
    pub fn new(bodies: Vec<Body>) -> Result<Self, StateError> {
        if bodies.is_empty() {
            return Err(StateError::Empty);
        }
        if let Some((index, body)) = bodies
            .iter()
            .enumerate()
            .find(|(_, b)| !(b.mass.is_finite() && b.mass > 0.0))
        {
            return Err(StateError::InvalidMass {
                index,
                mass: body.mass,
            });
        }

        let mut state = Self {
            bodies: bodies.clone(),
            initial: bodies,
            paused: false,
            selected: 0,
            ticks: 0,
        };
        state.reset();
        Ok(state)
    }

    /// The three-body reference configuration
    pub fn reference() -> Self {
        let initial = reference_bodies();
        Self {
            bodies: initial.clone(),
            initial,
            paused: false,
            selected: 0,
            ticks: 0,
        }
    }

    /// Restore the initial configuration, unpause and select body 0.
    pub fn reset(&mut self) {
        self.bodies.clone_from_slice(&self.initial);
        self.paused = false;
        self.selected = 0;
        self.ticks = 0;
        log::debug!("reset {} bodies", self.bodies.len());
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Always false: construction rejects empty configurations.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_body(&self) -> &Body {
        &self.bodies[self.selected]
    }

    pub fn selected_body_mut(&mut self) -> &mut Body {
        &mut self.bodies[self.selected]
    }

    /// Select body `index`. Out-of-range indices are ignored and return false.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.bodies.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Net acceleration on body `index` from every other body's current position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn acceleration(&self, index: usize, params: &Params) -> DVec2 {
        let body = &self.bodies[index];
        let mut accel = DVec2::ZERO;

        for (j, other) in self.bodies.iter().enumerate() {
            if j == index {
                continue;
            }
            let r = other.pos - body.pos;
            let dist_sq = r.x * r.x + r.y * r.y + params.softening;
            let f = params.gravity * other.mass / dist_sq;
            accel.x += f * r.x;
            accel.y += f * r.y;
        }

        accel
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::reference()
    }
}
