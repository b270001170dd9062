//! Seeded randomness and entropy-biased candidate ordering
//!
//! Variable ordering follows the classic most-constrained-first heuristic:
//! undetermined cells are shuffled, then stable-sorted by ascending entropy
//! so ties resolve randomly while low-entropy cells branch first. Value
//! ordering samples a cell's remaining tiles without replacement,
//! proportional to their weights.

use crate::spatial::grid::Grid;
use crate::spatial::tiles::TilePayload;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded random selector for reproducible stochastic choices
///
/// The only source of randomness in the solver; threading it explicitly
/// (rather than using global state) is what makes a run replayable from
/// its seed.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generic weighted random selection
    ///
    /// Returns an index into the weights array using the cumulative
    /// distribution; a non-positive total falls back to index zero.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }

    /// Shuffle a slice uniformly in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Order all indices by weighted sampling without replacement
    ///
    /// Earlier positions are proportionally more likely to carry heavier
    /// weights. Indices whose weight is not strictly positive are appended
    /// at the end in ascending order.
    pub fn weighted_order(&mut self, weights: &[f64]) -> Vec<usize> {
        let mut remaining = weights.to_vec();
        let mut picked = vec![false; weights.len()];
        let mut order = Vec::with_capacity(weights.len());

        loop {
            let total: f64 = remaining.iter().sum();
            if total <= 0.0 {
                break;
            }
            let index = self.weighted_choice(&remaining);
            order.push(index);
            if let Some(flag) = picked.get_mut(index) {
                *flag = true;
            }
            if let Some(weight) = remaining.get_mut(index) {
                *weight = 0.0;
            }
        }

        for (index, was_picked) in picked.iter().enumerate() {
            if !was_picked {
                order.push(index);
            }
        }
        order
    }
}

/// Undetermined cells ordered most-constrained-first
///
/// Shuffled before a stable sort on entropy, so cells with equal entropy
/// are visited in random order while lower-entropy cells always come first.
pub fn ordered_candidate_cells<P: TilePayload>(
    grid: &Grid<'_, P>,
    selector: &mut RandomSelector,
) -> Vec<[usize; 2]> {
    let mut cells: Vec<[usize; 2]> = grid
        .positions()
        .filter(|&[row, col]| {
            grid.possibilities(row, col)
                .is_some_and(|set| set.count() > 1)
        })
        .collect();
    selector.shuffle(&mut cells);
    cells.sort_by(|a, b| grid.entropy_at(*a).total_cmp(&grid.entropy_at(*b)));
    cells
}

/// A cell's remaining tile options in weight-biased random order
pub fn ordered_tile_options<P: TilePayload>(
    grid: &Grid<'_, P>,
    cell: [usize; 2],
    selector: &mut RandomSelector,
) -> Vec<usize> {
    let Some(set) = grid.possibilities(cell[0], cell[1]) else {
        return Vec::new();
    };
    let options: Vec<usize> = set.iter().collect();
    let weights: Vec<f64> = options
        .iter()
        .map(|&tile| grid.tile_set().weight(tile))
        .collect();

    selector
        .weighted_order(&weights)
        .into_iter()
        .filter_map(|index| options.get(index).copied())
        .collect()
}
