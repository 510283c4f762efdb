//! Fixed physics and control constants

/// Gravitational constant
pub const GRAVITY: f64 = 0.1;
/// Added to squared separation so coincident bodies stay finite
pub const SOFTENING: f64 = 0.01;
/// Velocity change per tick while a nudge control is held
pub const VELOCITY_STEP: f64 = 0.5;
/// Position change per tick while a move control is held
pub const POSITION_STEP: f64 = VELOCITY_STEP * 2.0;
/// Side length of the square drawn for each body
pub const BODY_SIZE: f64 = 8.0;
/// Logical viewport the positions are expressed in
pub const VIEWPORT: (f64, f64) = (800.0, 600.0);
/// Simulation ticks per second of wall-clock time in the viewer
pub const TICK_RATE: f64 = 60.0;
/// Most ticks the viewer will run to catch up in a single frame
pub const MAX_TICKS_PER_FRAME: usize = 8;

/// Physics and control settings.
///
/// Fields are not validated. `softening` must stay positive or coincident
/// bodies produce NaN; values other than the defaults are the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub gravity: f64,
    pub softening: f64,
    /// Tick length. 1.0 keeps the integrator on whole-tick units.
    pub time_step: f64,
    pub velocity_step: f64,
    pub position_step: f64,
    pub body_size: f64,
    pub viewport: (f64, f64),
}

impl Default for Params {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            softening: SOFTENING,
            time_step: 1.0,
            velocity_step: VELOCITY_STEP,
            position_step: POSITION_STEP,
            body_size: BODY_SIZE,
            viewport: VIEWPORT,
        }
    }
}
