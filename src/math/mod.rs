//! Mathematical utilities for the generator

/// Quadratic curve flattening and polygon containment
pub mod curve;

/// Round a value to two decimal places
///
/// Face dimensions are quantized this way before placement so the ring
/// geometry matches the reported face size exactly.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
