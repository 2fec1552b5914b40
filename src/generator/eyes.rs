//! Eye selection and iris placement
//!
//! A random subset of placed cells receives a white eye disc pulled slightly
//! toward the face center, with a smaller iris disc offset inside it.

use crate::generator::outer::PlacedShape;
use crate::generator::random::RandomSource;
use crate::io::configuration::{
    COLOR_EYE_IRIS, COLOR_EYE_WHITE, EYE_JITTER, EYE_PULL, EYE_RADIUS_SCALE, IRIS_OFFSET_SCALE,
    IRIS_RADIUS_SCALE, LAYER_EYE, LAYER_IRIS,
};
use crate::io::error::{GeneratorError, Result};
use crate::scene::{Scene, Shape};

/// Overlay `eye_count` eyes on distinct placed cells
///
/// Selection is uniform without replacement; selected cells are processed in
/// selection order. Per eye the draw order is: x jitter, y jitter, iris angle.
///
/// # Errors
///
/// Returns [`GeneratorError::InsufficientShapes`] when `eye_count` exceeds the
/// placed sequence length, so selection without replacement is impossible.
pub fn overlay(
    scene: &mut Scene,
    random: &mut RandomSource,
    placed: &[PlacedShape],
    eye_count: usize,
) -> Result<()> {
    if eye_count > placed.len() {
        return Err(GeneratorError::InsufficientShapes {
            requested: eye_count,
            placed: placed.len(),
        });
    }

    let indices = random.distinct_indices(placed.len(), eye_count);
    for index in indices {
        let Some(cell) = placed.get(index).copied() else {
            continue;
        };
        draw_eye(scene, random, cell);
    }
    Ok(())
}

/// Draw one eye disc and its iris on a placed cell
fn draw_eye(scene: &mut Scene, random: &mut RandomSource, cell: PlacedShape) {
    let jitter_x = random.uniform(-EYE_JITTER, EYE_JITTER);
    let jitter_y = random.uniform(-EYE_JITTER, EYE_JITTER);
    let eye_x = (0.0 - cell.x).mul_add(EYE_PULL, cell.x) + jitter_x;
    let eye_y = (0.0 - cell.y).mul_add(EYE_PULL, cell.y) + jitter_y;
    let eye_radius = cell.radius * EYE_RADIUS_SCALE;

    scene.push(Shape::Circle {
        center: [eye_x, eye_y],
        radius: eye_radius,
        color: COLOR_EYE_WHITE,
        layer: LAYER_EYE,
    });

    let iris_radius = eye_radius * IRIS_RADIUS_SCALE;
    let offset = eye_radius * IRIS_OFFSET_SCALE;
    let angle = random.angle();
    scene.push(Shape::Circle {
        center: [
            offset.mul_add(angle.cos(), eye_x),
            offset.mul_add(angle.sin(), eye_y),
        ],
        radius: iris_radius,
        color: COLOR_EYE_IRIS,
        layer: LAYER_IRIS,
    });
}
