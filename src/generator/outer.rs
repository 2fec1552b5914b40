//! Outer cell ring placement
//!
//! Cells are spaced evenly by angle around the face ellipse, each with radial,
//! size and shape jitter. A slot usually emits one circle or one rotated
//! ellipse; occasionally it emits a stacked snowman pair, which contributes two
//! entries to the placed sequence.

use crate::generator::face::FaceGeometry;
use crate::generator::random::RandomSource;
use crate::io::configuration::{
    ASPECT_JITTER, BASE_RADIUS_SCALE, CIRCLE_PROBABILITY, COLOR_OUTER, LAYER_OUTER, RANGE_JITTER,
    REFERENCE_SHAPE_COUNT, SIZE_JITTER, SNOWMAN_GAP_SCALE, SNOWMAN_LOWER_SCALE,
    SNOWMAN_PROBABILITY, SNOWMAN_UPPER_SCALE,
};
use crate::scene::{Scene, Shape};

/// One placed cell entry consumed by the eye layer
///
/// Snowman slots contribute two entries, one per sub-circle, so the sequence
/// can be longer than the requested slot count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedShape {
    /// Center x in world coordinates
    pub x: f64,
    /// Center y in world coordinates
    pub y: f64,
    /// Effective radius used for eye sizing
    pub radius: f64,
}

/// Base cell radius for a given slot count
///
/// Shrinks with the square root of the count so total covered area stays
/// roughly constant.
pub fn base_radius(count: usize) -> f64 {
    BASE_RADIUS_SCALE * (REFERENCE_SHAPE_COUNT / count as f64).sqrt()
}

/// Place `count` cell slots around the face and return the placed sequence
///
/// Per slot the draw order is: radial scale, size jitter, snowman branch,
/// then for non-snowman slots the circle/ellipse branch, then for ellipses
/// the two axis jitters and the rotation.
pub fn place(
    scene: &mut Scene,
    random: &mut RandomSource,
    face: &FaceGeometry,
    count: usize,
) -> Vec<PlacedShape> {
    let a = face.half_width();
    let b = face.half_height();
    let base = base_radius(count);

    let mut placed = Vec::with_capacity(count + count / 4);
    for slot in 0..count {
        let theta = std::f64::consts::TAU * slot as f64 / count as f64;
        let radius_scale = random.jitter(RANGE_JITTER);
        let x = a * theta.cos() * radius_scale;
        let y = b * theta.sin() * radius_scale;
        let radius = base * random.jitter(SIZE_JITTER);

        if random.chance(SNOWMAN_PROBABILITY) {
            place_snowman(scene, &mut placed, [x, y], radius);
        } else if random.chance(CIRCLE_PROBABILITY) {
            scene.push(Shape::Circle {
                center: [x, y],
                radius,
                color: COLOR_OUTER,
                layer: LAYER_OUTER,
            });
            placed.push(PlacedShape { x, y, radius });
        } else {
            let width = 2.0 * radius * random.jitter(ASPECT_JITTER);
            let height = 2.0 * radius * random.jitter(ASPECT_JITTER);
            let rotation_degrees = random.uniform(0.0, 360.0);
            scene.push(Shape::Ellipse {
                center: [x, y],
                width,
                height,
                rotation_degrees,
                color: COLOR_OUTER,
                layer: LAYER_OUTER,
            });
            placed.push(PlacedShape { x, y, radius });
        }
    }
    placed
}

/// Emit a stacked pair of circles at one slot position
fn place_snowman(
    scene: &mut Scene,
    placed: &mut Vec<PlacedShape>,
    position: [f64; 2],
    radius: f64,
) {
    let [x, y] = position;
    let upper_radius = radius * SNOWMAN_UPPER_SCALE;
    let lower_radius = radius * SNOWMAN_LOWER_SCALE;
    let gap = radius * SNOWMAN_GAP_SCALE;
    let upper_y = y + gap / 2.0;
    let lower_y = y - gap / 2.0;

    scene.push(Shape::Circle {
        center: [x, upper_y],
        radius: upper_radius,
        color: COLOR_OUTER,
        layer: LAYER_OUTER,
    });
    scene.push(Shape::Circle {
        center: [x, lower_y],
        radius: lower_radius,
        color: COLOR_OUTER,
        layer: LAYER_OUTER,
    });

    placed.push(PlacedShape {
        x,
        y: upper_y,
        radius: upper_radius,
    });
    placed.push(PlacedShape {
        x,
        y: lower_y,
        radius: lower_radius,
    });
}
