//! Generation pipeline orchestration and the individual drawing layers

/// Main generation executor and parameter handling
pub mod executor;
/// Eye selection and iris placement
pub mod eyes;
/// Base face ellipse
pub mod face;
/// Curved mouth patch
pub mod mouth;
/// Outer cell ring placement
pub mod outer;
/// Seeded random stream threaded through every layer
pub mod random;
