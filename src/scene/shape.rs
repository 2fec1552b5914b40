//! Drawable shape variants and the scene accumulator

use crate::io::configuration::CURVE_SEGMENTS;
use crate::math::curve::ClosedCurve;

/// Drawable primitive consumed uniformly by the renderer
///
/// A closed set of variants rather than dynamic dispatch; the renderer matches
/// on the kind once per shape and rasterizes accordingly.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled circle
    Circle {
        /// Center in world coordinates
        center: [f64; 2],
        /// Radius in world units
        radius: f64,
        /// Fill color
        color: [u8; 3],
        /// Compositing order, higher draws on top
        layer: u8,
    },
    /// Filled axis-jittered ellipse
    Ellipse {
        /// Center in world coordinates
        center: [f64; 2],
        /// Full width in world units
        width: f64,
        /// Full height in world units
        height: f64,
        /// Counterclockwise rotation in degrees
        rotation_degrees: f64,
        /// Fill color
        color: [u8; 3],
        /// Compositing order, higher draws on top
        layer: u8,
    },
    /// Filled closed curved patch
    CurvePath {
        /// Closed quadratic arc chain bounding the patch
        curve: ClosedCurve,
        /// Fill color
        color: [u8; 3],
        /// Compositing order, higher draws on top
        layer: u8,
    },
}

impl Shape {
    /// Compositing layer of the shape
    pub const fn layer(&self) -> u8 {
        match self {
            Self::Circle { layer, .. }
            | Self::Ellipse { layer, .. }
            | Self::CurvePath { layer, .. } => *layer,
        }
    }

    /// Fill color of the shape
    pub const fn color(&self) -> [u8; 3] {
        match self {
            Self::Circle { color, .. }
            | Self::Ellipse { color, .. }
            | Self::CurvePath { color, .. } => *color,
        }
    }

    /// Axis-aligned bounding box as `[min_x, min_y, max_x, max_y]`
    ///
    /// Rotated ellipses use the circumscribing circle of the longer half-axis,
    /// which over-covers but never clips.
    pub fn bounds(&self) -> [f64; 4] {
        match self {
            Self::Circle { center, radius, .. } => {
                let [cx, cy] = *center;
                [cx - radius, cy - radius, cx + radius, cy + radius]
            }
            Self::Ellipse {
                center,
                width,
                height,
                ..
            } => {
                let [cx, cy] = *center;
                let half_extent = width.max(*height) / 2.0;
                [
                    cx - half_extent,
                    cy - half_extent,
                    cx + half_extent,
                    cy + half_extent,
                ]
            }
            Self::CurvePath { curve, .. } => polygon_bounds(&curve.flatten(CURVE_SEGMENTS)),
        }
    }
}

/// Bounding box of a polygon vertex list
fn polygon_bounds(polygon: &[[f64; 2]]) -> [f64; 4] {
    let mut bounds = [f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY];
    for &[x, y] in polygon {
        bounds = [
            bounds[0].min(x),
            bounds[1].min(y),
            bounds[2].max(x),
            bounds[3].max(y),
        ];
    }
    bounds
}

/// Containment test for a filled circle
pub fn circle_contains(center: [f64; 2], radius: f64, point: [f64; 2]) -> bool {
    let dx = point[0] - center[0];
    let dy = point[1] - center[1];
    dx.mul_add(dx, dy * dy) <= radius * radius
}

/// Containment test for a filled rotated ellipse
pub fn ellipse_contains(
    center: [f64; 2],
    width: f64,
    height: f64,
    rotation_degrees: f64,
    point: [f64; 2],
) -> bool {
    let rx = width / 2.0;
    let ry = height / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }

    let dx = point[0] - center[0];
    let dy = point[1] - center[1];
    let angle = -rotation_degrees.to_radians();
    let (sin, cos) = angle.sin_cos();
    let local_x = dx.mul_add(cos, -(dy * sin));
    let local_y = dx.mul_add(sin, dy * cos);

    let nx = local_x / rx;
    let ny = local_y / ry;
    nx.mul_add(nx, ny * ny) <= 1.0
}

/// Ordered collection of shapes accumulated during a generation run
///
/// Append-only while layers run; the renderer reads it back sorted stably by
/// layer so insertion order breaks ties.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a shape
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Shapes in insertion order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}
