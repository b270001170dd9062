//! Solve progress display tracking determined cells

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SOLVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("solving [{bar:40.cyan/blue}] {pos}/{len} cells")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the number of determined cells
///
/// The position moves backward when the search backtracks, which is exactly
/// what the bar should show.
pub struct SolveProgress {
    bar: ProgressBar,
}

impl SolveProgress {
    /// Create a bar spanning the grid's total cell count
    pub fn new(total_cells: usize) -> Self {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(SOLVE_STYLE.clone());
        Self { bar }
    }

    /// Report the current number of determined cells
    pub fn set_solved(&self, cells: usize) {
        self.bar.set_position(cells as u64);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
