//! Input/output operations: CLI boundary, configuration, errors, encoding, progress

/// Command-line interface and batch generation runner
pub mod cli;
/// Tuning constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and export operations
pub mod error;
/// PNG encoding and file export
pub mod image;
/// Progress reporting for batch generation
pub mod progress;
