//! Diagnostics and observables for a running simulation
//!
//! Nothing here mutates state. Energy and momentum are reported for
//! inspection only; the integrator makes no promise to conserve them.

use crate::engine::SimulationState;
use crate::params::Params;
use glam::DVec2;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            DiagnosticSeverity::Warning => write!(f, "warning: {}", self.message),
            DiagnosticSeverity::Error => write!(f, "error: {}", self.message),
        }
    }
}

/// Check for non-finite coordinates (errors) and for bodies outside the
/// viewport (warnings)
pub fn check_state(state: &SimulationState, params: &Params) -> Vec<Diagnostic> {
    let (width, height) = params.viewport;
    let mut diagnostics = Vec::new();

    for (i, b) in state.bodies().iter().enumerate() {
        if !(b.pos.is_finite() && b.vel.is_finite()) {
            diagnostics.push(Diagnostic::error(format!(
                "body {} has a non-finite state: pos=({}, {}) vel=({}, {})",
                i + 1,
                b.pos.x,
                b.pos.y,
                b.vel.x,
                b.vel.y
            )));
        } else if b.pos.x < 0.0 || b.pos.y < 0.0 || b.pos.x > width || b.pos.y > height {
            diagnostics.push(Diagnostic::warning(format!(
                "body {} is outside the viewport at ({:.2}, {:.2})",
                i + 1,
                b.pos.x,
                b.pos.y
            )));
        }
    }

    diagnostics
}

/// Sum of m * v over all bodies
pub fn total_momentum(state: &SimulationState) -> DVec2 {
    state
        .bodies()
        .iter()
        .fold(DVec2::ZERO, |acc, b| acc + b.vel * b.mass())
}

/// Kinetic energy plus the softened pairwise potential -G m_i m_j / sqrt(r² + ε)
pub fn total_energy(state: &SimulationState, params: &Params) -> f64 {
    let bodies = state.bodies();
    let kinetic: f64 = bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.vel.length_squared())
        .sum();

    let mut potential = 0.0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let dist_sq = bodies[i].pos.distance_squared(bodies[j].pos) + params.softening;
            potential -= params.gravity * bodies[i].mass() * bodies[j].mass() / dist_sq.sqrt();
        }
    }

    kinetic + potential
}
