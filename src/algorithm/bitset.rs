use bitvec::prelude::*;
use std::fmt;

/// Fixed-capacity set of tile ids backing each grid cell's possibility state
///
/// Tile ids are indices into the owning tile set's tile list, so the bitset
/// uses plain 0-based indexing. Intersection and union are the only set
/// algebra the solver needs: intersection narrows a cell against what its
/// neighbors permit, union accumulates the permitted set across a neighbor's
/// remaining candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
    tile_capacity: usize,
}

impl TileBitset {
    /// Create a set with no tiles present
    pub fn empty(tile_capacity: usize) -> Self {
        Self {
            bits: bitvec![0; tile_capacity],
            tile_capacity,
        }
    }

    /// Create a set containing every tile id below the capacity
    pub fn filled(tile_capacity: usize) -> Self {
        Self {
            bits: bitvec![1; tile_capacity],
            tile_capacity,
        }
    }

    /// Create a set holding exactly one tile id
    pub fn single(tile_capacity: usize, tile: usize) -> Self {
        let mut set = Self::empty(tile_capacity);
        set.insert(tile);
        set
    }

    /// Insert a tile id; out-of-capacity ids are ignored
    pub fn insert(&mut self, tile: usize) {
        if tile < self.tile_capacity {
            self.bits.set(tile, true);
        }
    }

    /// Remove a tile id
    pub fn remove(&mut self, tile: usize) {
        if tile < self.tile_capacity {
            self.bits.set(tile, false);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Add every tile of another set to this one
    pub fn union_with(&mut self, other: &Self) {
        for tile in other.bits.iter_ones() {
            self.insert(tile);
        }
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The number of tile ids the set can hold
    pub const fn tile_capacity(&self) -> usize {
        self.tile_capacity
    }

    /// The single remaining tile id, if the cell is determined
    pub fn collapsed(&self) -> Option<usize> {
        if self.count() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Iterate over the tile ids present in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TileBitset({}/{} tiles)",
            self.count(),
            self.tile_capacity
        )
    }
}
