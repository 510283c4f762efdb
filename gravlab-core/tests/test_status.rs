//! Status text and draw list tests

use gravlab_core::engine::{Rgba, SimulationState};
use gravlab_core::input::{Action, ActionSet};
use gravlab_core::params::Params;
use gravlab_core::runtime::tick;
use gravlab_core::status::{draw_list, status_text, CONTROLS_HELP};
use gravlab_core::tests::test_helpers::single_body_state;

#[test]
fn test_reference_status_text() {
    let state = SimulationState::reference();
    let expected = "Controls:\n\
[1][2][3] = Select body\n\
Arrows = Change velocity\n\
WASD = Change position\n\
P = Pause, O = Resume, R = Reset\n\
\n\
Body 1: x=300.00 y=300.00 vx=0.00 vy=-1.20 <- selected\n\
Body 2: x=500.00 y=300.00 vx=0.00 vy=1.20\n\
Body 3: x=400.00 y=450.00 vx=1.20 vy=0.00\n\
\n\
Simulation: RUNNING";

    assert_eq!(status_text(&state), expected);
}

#[test]
fn test_status_starts_with_help() {
    let state = SimulationState::reference();
    assert!(status_text(&state).starts_with(CONTROLS_HELP));
}

#[test]
fn test_status_marks_selected_and_paused() {
    let params = Params::default();
    let mut state = SimulationState::reference();
    let input = ActionSet::new().with(Action::Pause).with(Action::Select(1));

    tick(&mut state, &input, &params);
    let text = status_text(&state);

    assert!(text.ends_with("\nSimulation: PAUSED"));
    assert_eq!(text.matches(" <- selected").count(), 1);
    assert!(text.contains("Body 2: x=500.00 y=300.00 vx=0.00 vy=1.20 <- selected\n"));
    assert!(text.contains("Body 1: x=300.00 y=300.00 vx=0.00 vy=-1.20\n"));
}

#[test]
fn test_status_rounds_to_two_decimals() {
    let state = single_body_state(1.004, 2.006, -0.126, 10.0);
    let text = status_text(&state);
    assert!(text.contains("Body 1: x=1.00 y=2.01 vx=-0.13 vy=10.00 <- selected\n"));
}

#[test]
fn test_draw_list_follows_bodies() {
    let params = Params::default();
    let state = SimulationState::reference();
    let draws = draw_list(&state, &params);

    assert_eq!(draws.len(), 3);
    assert_eq!((draws[0].x, draws[0].y), (300.0, 300.0));
    assert_eq!((draws[2].x, draws[2].y), (400.0, 450.0));
    assert_eq!(draws[1].color, Rgba::opaque(0, 255, 0));
    assert!(draws.iter().all(|d| d.size == 8.0));
}
