//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Error types for solver and export operations
pub mod error;
/// PNG rasterization of layered drawings
pub mod image;
/// Solve progress display
pub mod progress;
