//! Fixed-rate tick clock
//!
//! Converts variable frame times into a whole number of simulation ticks so
//! the simulation speed does not depend on the display refresh rate.

use crate::params::{MAX_TICKS_PER_FRAME, TICK_RATE};

#[derive(Debug, Clone)]
pub struct TickClock {
    /// Wall-clock seconds per tick
    pub tick_length: f64,
    /// Cap on ticks returned by one `advance`
    pub max_ticks: usize,
    /// Elapsed time not yet spent on ticks
    accumulator: f64,
}

impl TickClock {
    pub fn new(tick_rate: f64, max_ticks: usize) -> Self {
        Self {
            tick_length: 1.0 / tick_rate,
            max_ticks,
            accumulator: 0.0,
        }
    }

    /// Add `dt` seconds and return how many ticks are due.
    ///
    /// Negative or non-finite `dt` counts as zero. When the cap is hit the
    /// remaining backlog is dropped instead of carried into later frames.
    pub fn advance(&mut self, dt: f64) -> usize {
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }

        let mut ticks = 0;
        while self.accumulator >= self.tick_length && ticks < self.max_ticks {
            self.accumulator -= self.tick_length;
            ticks += 1;
        }
        if ticks == self.max_ticks {
            self.accumulator = 0.0;
        }

        ticks
    }

    /// Time carried over to the next frame
    pub fn pending(&self) -> f64 {
        self.accumulator
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(TICK_RATE, MAX_TICKS_PER_FRAME)
    }
}
