//! Base face ellipse

use crate::generator::random::RandomSource;
use crate::io::configuration::{COLOR_FACE, FACE_SIZE_MAX, FACE_SIZE_MIN, LAYER_FACE};
use crate::math::round_to_hundredths;
use crate::scene::{Scene, Shape};

/// Face dimensions consumed by the outer-shape ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    /// Full width in world units
    pub width: f64,
    /// Full height in world units
    pub height: f64,
}

impl FaceGeometry {
    /// Horizontal half-axis of the face ellipse
    pub const fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Vertical half-axis of the face ellipse
    pub const fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

/// Draw the base face ellipse and report its geometry
///
/// Width and height are drawn independently, in that order, and rounded to
/// two decimal places.
pub fn draw(scene: &mut Scene, random: &mut RandomSource) -> FaceGeometry {
    let width = round_to_hundredths(random.uniform(FACE_SIZE_MIN, FACE_SIZE_MAX));
    let height = round_to_hundredths(random.uniform(FACE_SIZE_MIN, FACE_SIZE_MAX));

    scene.push(Shape::Ellipse {
        center: [0.0, 0.0],
        width,
        height,
        rotation_degrees: 0.0,
        color: COLOR_FACE,
        layer: LAYER_FACE,
    });

    FaceGeometry { width, height }
}
