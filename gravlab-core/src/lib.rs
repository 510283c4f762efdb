pub mod clock;
pub mod diagnostics;
pub mod engine;
pub mod input;
pub mod integrator;
pub mod params;
pub mod runtime;
pub mod scenario;
pub mod status;

pub use clock::TickClock;
pub use diagnostics::{check_state, total_energy, total_momentum, Diagnostic, DiagnosticSeverity};
pub use engine::{Body, Rgba, SimulationState, StateError};
pub use input::{Action, ActionSet, Direction, InputSource};
pub use integrator::step;
pub use params::Params;
pub use runtime::{apply_controls, run_ticks, tick};
pub use scenario::{reference_bodies, REFERENCE_BODY_COUNT};
pub use status::{draw_list, status_text, DrawRequest, CONTROLS_HELP};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
