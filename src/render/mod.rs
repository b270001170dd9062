//! Drawing payloads and translation of solved grids into layered output

/// Polyline drawings and their tile-space transforms
pub mod drawing;
/// Placement of solved tiles into per-layer drawings
pub mod layout;
/// Built-in tile catalogs
pub mod motifs;

pub use drawing::{Drawing, Point};
pub use layout::assemble_layers;
