//! Fixed-rate clock tests

use gravlab_core::clock::TickClock;
use gravlab_core::params::{MAX_TICKS_PER_FRAME, TICK_RATE};

#[test]
fn test_ticks_follow_elapsed_time_not_frames() {
    // Same second of wall time split into 2 or 8 frames yields the same ticks
    let mut slow = TickClock::new(4.0, 16);
    let mut fast = TickClock::new(4.0, 16);

    let slow_ticks: usize = (0..2).map(|_| slow.advance(0.5)).sum();
    let fast_ticks: usize = (0..8).map(|_| fast.advance(0.125)).sum();

    assert_eq!(slow_ticks, 4);
    assert_eq!(fast_ticks, 4);
}

#[test]
fn test_partial_time_carries_over() {
    let mut clock = TickClock::new(4.0, 16);

    assert_eq!(clock.advance(0.125), 0);
    assert_eq!(clock.pending(), 0.125);
    assert_eq!(clock.advance(0.125), 1);
    assert_eq!(clock.pending(), 0.0);
    assert_eq!(clock.advance(0.375), 1);
    assert_eq!(clock.pending(), 0.125);
}

#[test]
fn test_catch_up_is_capped() {
    let mut clock = TickClock::new(4.0, 3);

    assert_eq!(clock.advance(10.0), 3);
    // Backlog is dropped once the cap is hit
    assert_eq!(clock.pending(), 0.0);
    assert_eq!(clock.advance(0.25), 1);
}

#[test]
fn test_bad_frame_times_are_ignored() {
    let mut clock = TickClock::new(4.0, 16);

    assert_eq!(clock.advance(-1.0), 0);
    assert_eq!(clock.advance(f64::NAN), 0);
    assert_eq!(clock.advance(f64::INFINITY), 0);
    assert_eq!(clock.pending(), 0.0);
}

#[test]
fn test_default_clock_runs_sixty_ticks_per_second() {
    let mut clock = TickClock::default();
    assert_eq!(clock.max_ticks, MAX_TICKS_PER_FRAME);
    assert_eq!(clock.tick_length, 1.0 / TICK_RATE);

    // One second delivered at 120 Hz
    let ticks: usize = (0..120).map(|_| clock.advance(1.0 / 120.0)).sum();
    assert!((59..=60).contains(&ticks), "got {} ticks", ticks);
}
