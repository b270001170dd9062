//! Grid possibility state with per-cell probability distributions and entropy
//!
//! Each cell holds the set of tile ids not yet ruled out, the renormalized
//! weight distribution over that set, and its Shannon entropy. The grid
//! borrows its tile set, so the borrow checker guarantees no tile can be
//! registered while a grid over the set is alive; the adjacency table a
//! grid was built against therefore stays consistent for its whole life.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, SolverError};
use crate::math::probability::{normalized_weights, shannon_entropy};
use crate::spatial::direction::Direction;
use crate::spatial::tiles::{AdjacencyRules, TilePayload, TileSet};
use ndarray::{Array2, Array3};

/// Neighbor topology at the grid boundary
///
/// Clamped grids give edge cells fewer neighbors; toroidal grids wrap both
/// axes. A grid uses exactly one topology for its whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    /// Edge cells have no neighbor beyond the boundary
    #[default]
    Clamped,
    /// Rows and columns wrap around
    Toroidal,
}

impl Topology {
    /// The neighboring cell in `direction`, if one exists under this topology
    pub fn neighbor(
        self,
        position: [usize; 2],
        direction: Direction,
        dimensions: (usize, usize),
    ) -> Option<[usize; 2]> {
        let (rows, cols) = dimensions;
        if rows == 0 || cols == 0 {
            return None;
        }
        let [row_delta, col_delta] = direction.offset();
        let row = position[0] as i64 + row_delta;
        let col = position[1] as i64 + col_delta;
        match self {
            Self::Clamped => {
                let in_bounds =
                    row >= 0 && col >= 0 && row < rows as i64 && col < cols as i64;
                in_bounds.then(|| [row as usize, col as usize])
            }
            Self::Toroidal => Some([
                row.rem_euclid(rows as i64) as usize,
                col.rem_euclid(cols as i64) as usize,
            ]),
        }
    }
}

/// Search state over a rows × cols board of possibility sets
///
/// Created fully unconstrained (every tile possible everywhere with the
/// tile set's prior weight distribution), narrowed in place by propagation
/// and collapse, and deep-copied at every search decision point.
#[derive(Clone, Debug)]
pub struct Grid<'ts, P> {
    tile_set: &'ts TileSet<P>,
    rules: &'ts AdjacencyRules,
    topology: Topology,
    dimensions: (usize, usize),
    possibilities: Array2<TileBitset>,
    probabilities: Array3<f64>,
    entropy: Array2<f64>,
}

impl<'ts, P: TilePayload> Grid<'ts, P> {
    /// Create an unconstrained grid over a finished tile set
    ///
    /// # Errors
    ///
    /// Fails fast on caller mistakes rather than solving a wrong problem:
    /// an empty tile set, adjacency rules not built since the last tile
    /// registration, or zero rows or columns.
    pub fn new(
        tile_set: &'ts TileSet<P>,
        rows: usize,
        cols: usize,
        topology: Topology,
    ) -> Result<Self> {
        if tile_set.is_empty() {
            return Err(SolverError::EmptyTileSet);
        }
        let rules = tile_set.rules().ok_or(SolverError::RulesNotBuilt)?;
        if rows == 0 || cols == 0 {
            return Err(SolverError::InvalidDimensions { rows, cols });
        }

        let tile_count = tile_set.tile_count();
        let raw_weights: Vec<f64> = (0..tile_count).map(|id| tile_set.weight(id)).collect();
        let prior = normalized_weights(&raw_weights);
        let prior_entropy = shannon_entropy(&prior);

        let mut probabilities = Array3::zeros((rows, cols, tile_count));
        for ((_, _, tile), value) in probabilities.indexed_iter_mut() {
            *value = prior.get(tile).copied().unwrap_or(0.0);
        }

        Ok(Self {
            tile_set,
            rules,
            topology,
            dimensions: (rows, cols),
            possibilities: Array2::from_elem((rows, cols), TileBitset::filled(tile_count)),
            probabilities,
            entropy: Array2::from_elem((rows, cols), prior_entropy),
        })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Total cell count
    pub const fn cell_count(&self) -> usize {
        self.dimensions.0 * self.dimensions.1
    }

    /// Number of tile ids per cell
    pub fn tile_count(&self) -> usize {
        self.tile_set.tile_count()
    }

    /// The tile set this grid solves over
    pub const fn tile_set(&self) -> &'ts TileSet<P> {
        self.tile_set
    }

    /// The adjacency table the grid was built against
    pub const fn rules(&self) -> &'ts AdjacencyRules {
        self.rules
    }

    /// The boundary topology
    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Iterate over all cell positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = [usize; 2]> {
        let (rows, cols) = self.dimensions;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| [row, col]))
    }

    /// The neighboring cell in `direction`, if one exists
    pub fn neighbor(&self, position: [usize; 2], direction: Direction) -> Option<[usize; 2]> {
        self.topology.neighbor(position, direction, self.dimensions)
    }

    /// The possibility set at a cell
    pub fn possibilities(&self, row: usize, col: usize) -> Option<&TileBitset> {
        self.possibilities.get([row, col])
    }

    /// Shannon entropy of a cell's remaining-candidate distribution
    pub fn entropy_at(&self, position: [usize; 2]) -> f64 {
        self.entropy.get(position).copied().unwrap_or(0.0)
    }

    /// Renormalized probability of a tile at a cell
    pub fn probability(&self, row: usize, col: usize, tile: usize) -> f64 {
        self.probabilities
            .get([row, col, tile])
            .copied()
            .unwrap_or(0.0)
    }

    /// Intersect a cell's possibility set with `allowed`
    ///
    /// The only mutation propagation performs: it can never add options, so
    /// possibility sets shrink monotonically. Returns whether the set
    /// actually shrank; the cell's distribution and entropy are refreshed
    /// on change.
    pub fn restrict_cell(&mut self, row: usize, col: usize, allowed: &TileBitset) -> bool {
        let changed = self.possibilities.get_mut([row, col]).is_some_and(|set| {
            let before = set.count();
            set.intersect_with(allowed);
            set.count() < before
        });
        if changed {
            self.refresh_cell(row, col);
        }
        changed
    }

    /// Pin a cell to a single tile id
    pub fn collapse_cell(&mut self, position: [usize; 2], tile: usize) {
        let tile_count = self.tile_count();
        if let Some(set) = self.possibilities.get_mut(position) {
            *set = TileBitset::single(tile_count, tile);
        }
        self.refresh_cell(position[0], position[1]);
    }

    /// Contradiction and progress summary in one pass
    ///
    /// `None` if any cell has no possible tile left (the grid, and the
    /// search branch that produced it, is dead); otherwise the number of
    /// cells still holding more than one option, where `Some(0)` means
    /// fully solved.
    pub fn unresolved_cells(&self) -> Option<usize> {
        let mut open = 0;
        for set in &self.possibilities {
            match set.count() {
                0 => return None,
                1 => {}
                _ => open += 1,
            }
        }
        Some(open)
    }

    /// The single determined tile id at a cell, if the cell is determined
    pub fn determined(&self, row: usize, col: usize) -> Option<usize> {
        self.possibilities
            .get([row, col])
            .and_then(TileBitset::collapsed)
    }

    /// The full solution as a tile-id array, if every cell is determined
    pub fn solution(&self) -> Option<Array2<usize>> {
        let mut out = Array2::zeros(self.dimensions);
        for position in self.positions() {
            let tile = self.determined(position[0], position[1])?;
            if let Some(slot) = out.get_mut(position) {
                *slot = tile;
            }
        }
        Some(out)
    }

    /// Recompute a cell's probability row and entropy from its possibility set
    fn refresh_cell(&mut self, row: usize, col: usize) {
        let Some(set) = self.possibilities.get([row, col]) else {
            return;
        };
        let candidates: Vec<usize> = set.iter().collect();
        let weights: Vec<f64> = candidates
            .iter()
            .map(|&id| self.tile_set.weight(id))
            .collect();
        let distribution = normalized_weights(&weights);

        for tile in 0..self.tile_count() {
            if let Some(value) = self.probabilities.get_mut([row, col, tile]) {
                *value = 0.0;
            }
        }
        for (&tile, &p) in candidates.iter().zip(distribution.iter()) {
            if let Some(value) = self.probabilities.get_mut([row, col, tile]) {
                *value = p;
            }
        }
        if let Some(value) = self.entropy.get_mut([row, col]) {
            *value = shannon_entropy(&distribution);
        }
    }
}
