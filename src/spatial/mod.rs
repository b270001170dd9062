//! Tiles, adjacency rules, and grid possibility state

/// Compass directions for edges and neighbors
pub mod direction;
/// Grid possibility state and boundary topology
pub mod grid;
/// Tile templates, variant generation, and adjacency rules
pub mod tiles;

pub use direction::Direction;
pub use grid::{Grid, Topology};
pub use tiles::{AdjacencyRules, EdgeLabel, Tile, TilePayload, TileSet};
