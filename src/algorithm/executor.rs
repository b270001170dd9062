//! Depth-first backtracking search over an explicit stack of choice frames

use crate::algorithm::propagation::reduce_from;
use crate::algorithm::selection::{RandomSelector, ordered_candidate_cells, ordered_tile_options};
use crate::io::progress::SolveProgress;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TilePayload;

/// One decision level of the search: a grid snapshot plus the ordered
/// (cell, tile) choices not yet tried
///
/// The frame owns its own copy of the grid, so children cloned from it can
/// be mutated and discarded freely; popping the frame is the entire undo
/// mechanism. The cursor makes the frame a resumable iterator: backtracking
/// re-enters it exactly where it left off.
pub struct ChoiceFrame<'ts, P> {
    grid: Grid<'ts, P>,
    pairs: Vec<([usize; 2], usize)>,
    cursor: usize,
}

impl<'ts, P: TilePayload> ChoiceFrame<'ts, P> {
    /// Snapshot a grid and enumerate its choices
    ///
    /// Cells are ordered most-constrained-first with random tie-breaking;
    /// within a cell, options are ordered by weighted sampling without
    /// replacement. Cells after the first are fallbacks reached only when
    /// every option of every earlier cell has failed.
    pub fn new(grid: Grid<'ts, P>, selector: &mut RandomSelector) -> Self {
        let mut pairs = Vec::new();
        for cell in ordered_candidate_cells(&grid, selector) {
            for tile in ordered_tile_options(&grid, cell, selector) {
                pairs.push((cell, tile));
            }
        }
        Self {
            grid,
            pairs,
            cursor: 0,
        }
    }

    /// Produce the next viable child grid, advancing the cursor
    ///
    /// Each child is an independent deep copy of the frame's grid with one
    /// cell pinned and the consequences propagated. Children that are
    /// immediately contradictory are skipped. `None` means the frame is
    /// exhausted and the caller must backtrack.
    pub fn next_candidate(&mut self) -> Option<Grid<'ts, P>> {
        while let Some(&(cell, tile)) = self.pairs.get(self.cursor) {
            self.cursor += 1;
            let mut child = self.grid.clone();
            child.collapse_cell(cell, tile);
            reduce_from(&mut child, cell);
            if child.unresolved_cells().is_some() {
                return Some(child);
            }
        }
        None
    }
}

/// Solve a grid by exhaustive depth-first backtracking search
///
/// Returns the first fully determined grid found, or `None` when the whole
/// search space is exhausted without one; global unsatisfiability is an
/// ordinary value, not an error. Contradictions encountered along the way
/// only abandon their branch. The search is exact but worst-case
/// exponential; callers wanting a bound must impose it externally.
pub fn solve_grid<'ts, P: TilePayload>(
    grid: Grid<'ts, P>,
    selector: &mut RandomSelector,
    progress: &mut Option<SolveProgress>,
) -> Option<Grid<'ts, P>> {
    let total_cells = grid.cell_count();
    match grid.unresolved_cells() {
        None => return None,
        Some(0) => return Some(grid),
        Some(open) => {
            if let Some(bar) = progress {
                bar.set_solved(total_cells - open);
            }
        }
    }

    let mut stack = vec![ChoiceFrame::new(grid, selector)];
    while !stack.is_empty() {
        let candidate = stack.last_mut().and_then(ChoiceFrame::next_candidate);
        match candidate {
            None => {
                stack.pop();
            }
            Some(child) => match child.unresolved_cells() {
                // The frame filters contradictions already; discard defensively
                None => {}
                Some(0) => {
                    if let Some(bar) = progress {
                        bar.set_solved(total_cells);
                    }
                    return Some(child);
                }
                Some(open) => {
                    if let Some(bar) = progress {
                        bar.set_solved(total_cells - open);
                    }
                    stack.push(ChoiceFrame::new(child, selector));
                }
            },
        }
    }
    None
}
