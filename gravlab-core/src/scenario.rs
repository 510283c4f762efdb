//! Initial configurations

use crate::engine::{Body, Rgba};
use glam::DVec2;

pub const REFERENCE_BODY_COUNT: usize = 3;

/// Three equal masses: two on a horizontal line moving in opposite
/// directions and one below them moving right.
pub fn reference_bodies() -> Vec<Body> {
    vec![
        Body::new(
            DVec2::new(300.0, 300.0),
            DVec2::new(0.0, -1.2),
            10.0,
            Rgba::opaque(255, 0, 0),
        ),
        Body::new(
            DVec2::new(500.0, 300.0),
            DVec2::new(0.0, 1.2),
            10.0,
            Rgba::opaque(0, 255, 0),
        ),
        Body::new(
            DVec2::new(400.0, 450.0),
            DVec2::new(1.2, 0.0),
            10.0,
            Rgba::opaque(0, 0, 255),
        ),
    ]
}
