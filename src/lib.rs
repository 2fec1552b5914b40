//! Seeded procedural character generator producing cell-creature portraits
//!
//! The system renders a colored elliptical face, a curved mouth, a ring of
//! randomized outer cell shapes, and eyes overlaid on a subset of those cells,
//! then encodes the composited canvas as a PNG byte buffer. All randomness
//! derives from a single seeded stream in a fixed draw order, so identical
//! parameters and seed reproduce the image bit for bit.

#![forbid(unsafe_code)]

/// Generation pipeline: seed resolution and the face, mouth, outer-shape and eye layers
pub mod generator;
/// Input/output operations, CLI boundary and error handling
pub mod io;
/// Mathematical utilities for curve flattening and rounding
pub mod math;
/// Scene model and canvas rasterization
pub mod scene;

pub use generator::executor::{GenerationParameters, GenerationResult, generate};
pub use io::error::{GeneratorError, Result};
