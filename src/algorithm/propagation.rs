//! Constraint propagation: worklist reduction of cell possibility sets

use crate::algorithm::bitset::TileBitset;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TilePayload;

/// Narrow one cell against what its neighbors still permit
///
/// For each in-topology neighbor, a tile survives only if some tile still
/// possible at that neighbor allows it across the shared edge. The adjacency
/// table is symmetric, so querying the neighbor's permitted set in the
/// opposite direction enforces compatibility from both sides; the cascade
/// back toward the neighbor happens when the caller re-queues this cell's
/// neighbors after a change. Returns whether the possibility set shrank.
pub fn reduce_cell<P: TilePayload>(grid: &mut Grid<'_, P>, row: usize, col: usize) -> bool {
    let rules = grid.rules();
    let tile_count = grid.tile_count();
    let mut changed = false;

    for direction in Direction::ALL {
        let Some(neighbor) = grid.neighbor([row, col], direction) else {
            continue;
        };
        let Some(neighbor_set) = grid.possibilities(neighbor[0], neighbor[1]) else {
            continue;
        };

        let mut allowed = TileBitset::empty(tile_count);
        for tile in neighbor_set.iter() {
            if let Some(partners) = rules.allowed(direction.opposite(), tile) {
                allowed.union_with(partners);
            }
        }
        if grid.restrict_cell(row, col, &allowed) {
            changed = true;
        }
    }

    changed
}

/// Propagate outward from a just-changed cell until nothing shrinks
///
/// The worklist starts with `start`'s neighbors rather than `start` itself:
/// the one caller pins `start` to a single tile immediately beforehand, so
/// reducing it first would be a no-op. Every reduction can only shrink a
/// possibility set, a monotone quantity bounded below by zero, so the
/// frontier always drains.
pub fn reduce_from<P: TilePayload>(grid: &mut Grid<'_, P>, start: [usize; 2]) {
    let mut frontier: Vec<[usize; 2]> = Vec::new();
    for direction in Direction::ALL {
        if let Some(neighbor) = grid.neighbor(start, direction) {
            if !frontier.contains(&neighbor) {
                frontier.push(neighbor);
            }
        }
    }

    while let Some(position) = frontier.pop() {
        if reduce_cell(grid, position[0], position[1]) {
            for direction in Direction::ALL {
                if let Some(neighbor) = grid.neighbor(position, direction) {
                    if !frontier.contains(&neighbor) {
                        frontier.push(neighbor);
                    }
                }
            }
        }
    }
}
