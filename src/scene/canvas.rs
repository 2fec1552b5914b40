//! Canvas raster state and shape compositing
//!
//! The canvas is a square float raster over a fixed world view. Shapes are
//! composited in ascending layer order; per-pixel coverage is estimated on a
//! supersample grid and alpha-blended, so edges stay smooth without a vector
//! backend.

use crate::io::configuration::{CANVAS_RESOLUTION, CURVE_SEGMENTS, SUPERSAMPLE_GRID, VIEW_EXTENT};
use crate::math::curve::point_in_polygon;
use crate::scene::shape::{Scene, Shape, circle_contains, ellipse_contains};
use ndarray::Array3;

/// Square raster of normalized RGB values over a centered world view
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Pixel channels indexed by (row, column, channel), values in [0, 1]
    pixels: Array3<f32>,
    /// Width and height in pixels
    resolution: usize,
    /// Half-extent of the world view
    extent: f64,
}

impl Canvas {
    /// Create a white canvas
    pub fn new(resolution: usize, extent: f64) -> Self {
        Self {
            pixels: Array3::ones((resolution, resolution, 3)),
            resolution,
            extent,
        }
    }

    /// Composite a scene onto a fresh canvas at the configured resolution
    ///
    /// Shapes are drawn by ascending layer; the sort is stable, so shapes on
    /// the same layer keep their insertion order.
    pub fn render(scene: &Scene) -> Self {
        let mut canvas = Self::new(CANVAS_RESOLUTION, VIEW_EXTENT);
        let mut ordered: Vec<&Shape> = scene.shapes().iter().collect();
        ordered.sort_by_key(|shape| shape.layer());
        for shape in ordered {
            canvas.composite(shape);
        }
        canvas
    }

    /// Width and height in pixels
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// World-space width of one pixel
    fn pixel_step(&self) -> f64 {
        2.0 * self.extent / self.resolution as f64
    }

    /// World x coordinate of a horizontal pixel offset (column + subpixel)
    fn sample_x(&self, offset: f64) -> f64 {
        offset.mul_add(self.pixel_step(), -self.extent)
    }

    /// World y coordinate of a vertical pixel offset (row + subpixel)
    ///
    /// Row zero is the top of the canvas, so y decreases with the offset.
    fn sample_y(&self, offset: f64) -> f64 {
        offset.mul_add(-self.pixel_step(), self.extent)
    }

    /// Pixel index covering a world coordinate, clamped to the canvas
    fn clamped_index(&self, normalized: f64) -> usize {
        let last = (self.resolution - 1) as f64;
        (normalized / self.pixel_step()).floor().clamp(0.0, last) as usize
    }

    /// Blend one shape onto the canvas using supersampled coverage
    pub fn composite(&mut self, shape: &Shape) {
        let [min_x, min_y, max_x, max_y] = shape.bounds();
        if max_x < -self.extent
            || min_x > self.extent
            || max_y < -self.extent
            || min_y > self.extent
        {
            return;
        }

        // The polygon is flattened once per shape, not once per sample
        let polygon = match shape {
            Shape::CurvePath { curve, .. } => Some(curve.flatten(CURVE_SEGMENTS)),
            _ => None,
        };

        let col_start = self.clamped_index(min_x + self.extent);
        let col_end = self.clamped_index(max_x + self.extent);
        let row_start = self.clamped_index(self.extent - max_y);
        let row_end = self.clamped_index(self.extent - min_y);

        let color = normalized_color(shape.color());
        let samples = (SUPERSAMPLE_GRID * SUPERSAMPLE_GRID) as f32;

        for row in row_start..=row_end {
            for col in col_start..=col_end {
                let coverage = self.pixel_coverage(shape, polygon.as_deref(), row, col) / samples;
                if coverage <= 0.0 {
                    continue;
                }
                self.blend_pixel(row, col, color, coverage);
            }
        }
    }

    /// Count of supersample points inside the shape for one pixel
    fn pixel_coverage(
        &self,
        shape: &Shape,
        polygon: Option<&[[f64; 2]]>,
        row: usize,
        col: usize,
    ) -> f32 {
        let mut inside_count = 0_u32;
        for sub_row in 0..SUPERSAMPLE_GRID {
            for sub_col in 0..SUPERSAMPLE_GRID {
                let fx = (sub_col as f64 + 0.5) / SUPERSAMPLE_GRID as f64;
                let fy = (sub_row as f64 + 0.5) / SUPERSAMPLE_GRID as f64;
                let point = [
                    self.sample_x(col as f64 + fx),
                    self.sample_y(row as f64 + fy),
                ];
                if sample_inside(shape, polygon, point) {
                    inside_count += 1;
                }
            }
        }
        inside_count as f32
    }

    /// Alpha-blend a color over one pixel
    fn blend_pixel(&mut self, row: usize, col: usize, color: [f32; 3], coverage: f32) {
        let remainder = 1.0 - coverage;
        for (channel, &component) in color.iter().enumerate() {
            if let Some(value) = self.pixels.get_mut([row, col, channel]) {
                *value = remainder.mul_add(*value, coverage * component);
            }
        }
    }

    /// Quantized color of one pixel
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        let mut rgb = [0_u8; 3];
        for (channel, slot) in rgb.iter_mut().enumerate() {
            let value = self
                .pixels
                .get([row, col, channel])
                .copied()
                .unwrap_or(1.0);
            *slot = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
        rgb
    }
}

/// Containment dispatch over the shape variants
fn sample_inside(shape: &Shape, polygon: Option<&[[f64; 2]]>, point: [f64; 2]) -> bool {
    match shape {
        Shape::Circle { center, radius, .. } => circle_contains(*center, *radius, point),
        Shape::Ellipse {
            center,
            width,
            height,
            rotation_degrees,
            ..
        } => ellipse_contains(*center, *width, *height, *rotation_degrees, point),
        Shape::CurvePath { .. } => polygon.is_some_and(|vertices| point_in_polygon(vertices, point)),
    }
}

/// Convert an 8-bit color to normalized channel values
fn normalized_color(color: [u8; 3]) -> [f32; 3] {
    let mut normalized = [0.0_f32; 3];
    for (slot, &component) in normalized.iter_mut().zip(color.iter()) {
        *slot = f32::from(component) / 255.0;
    }
    normalized
}
