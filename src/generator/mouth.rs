//! Curved mouth patch
//!
//! The mouth is a closed chain of three quadratic arcs through seven control
//! vertices: right edge, dipped top, left edge, left-bottom corner, deepened
//! bottom center, right-bottom corner, and back to the right edge. The final
//! vertex coincides with the first, closing the patch.

use crate::generator::random::RandomSource;
use crate::io::configuration::{
    COLOR_MOUTH, LAYER_MOUTH, MOUTH_BOTTOM_SCALE, MOUTH_CENTER, MOUTH_CURVE_DEPTH_MAX,
    MOUTH_CURVE_DEPTH_MIN, MOUTH_HEIGHT_MAX, MOUTH_HEIGHT_MIN, MOUTH_WIDTH_MAX, MOUTH_WIDTH_MIN,
};
use crate::math::curve::{ClosedCurve, QuadraticArc};
use crate::scene::{Scene, Shape};

/// Build the mouth outline for the given dimensions
///
/// Separated from the random draws so the geometry is testable with fixed
/// values.
pub fn mouth_curve(width: f64, height: f64, curve_depth: f64) -> ClosedCurve {
    let [cx, cy] = MOUTH_CENTER;
    let rx = width / 2.0;
    let ry = height / 2.0;
    let bottom = ry.mul_add(-MOUTH_BOTTOM_SCALE, cy);

    ClosedCurve {
        start: [cx + rx, cy],
        arcs: vec![
            QuadraticArc {
                control: [cx, cy - curve_depth],
                end: [cx - rx, cy],
            },
            QuadraticArc {
                control: [cx - rx, cy - ry],
                end: [cx, bottom],
            },
            QuadraticArc {
                control: [cx + rx, cy - ry],
                end: [cx + rx, cy],
            },
        ],
    }
}

/// Draw the mouth patch above the face
///
/// Width, height and curve depth are drawn in that order.
pub fn draw(scene: &mut Scene, random: &mut RandomSource) {
    let width = random.uniform(MOUTH_WIDTH_MIN, MOUTH_WIDTH_MAX);
    let height = random.uniform(MOUTH_HEIGHT_MIN, MOUTH_HEIGHT_MAX);
    let curve_depth = random.uniform(MOUTH_CURVE_DEPTH_MIN, MOUTH_CURVE_DEPTH_MAX);

    scene.push(Shape::CurvePath {
        curve: mouth_curve(width, height, curve_depth),
        color: COLOR_MOUTH,
        layer: LAYER_MOUTH,
    });
}
