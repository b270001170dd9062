//! Command-line interface for generating solved tile patterns

use crate::algorithm::executor::solve_grid;
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{
    DEFAULT_BLANK_WEIGHT, DEFAULT_COLORS, DEFAULT_COLS, DEFAULT_OUTPUT, DEFAULT_PIXELS_PER_TILE,
    DEFAULT_ROWS, DEFAULT_SEED,
};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::io::image::export_layers_as_png;
use crate::io::progress::SolveProgress;
use crate::render::drawing::Drawing;
use crate::render::layout::assemble_layers;
use crate::render::motifs;
use crate::spatial::grid::{Grid, Topology};
use crate::spatial::tiles::TileSet;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Built-in tile catalog to solve
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Motif {
    /// Multi-color pipe network with crossings and an empty tile
    Pipes,
    /// Single-layer maze of elbows and straights
    Angles,
}

#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Solve an edge-matching tile grid and render it for plotting"
)]
/// Command-line arguments for the pattern generator
pub struct Cli {
    /// Output PNG path
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Tile catalog to solve
    #[arg(short, long, value_enum, default_value_t = Motif::Pipes)]
    pub motif: Motif,

    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of pipe colors (pipes motif only)
    #[arg(short, long, default_value_t = DEFAULT_COLORS)]
    pub colors: usize,

    /// Relative weight of the empty tile (pipes motif only)
    #[arg(long, default_value_t = DEFAULT_BLANK_WEIGHT)]
    pub blank_weight: f64,

    /// Wrap rows and columns toroidally instead of clamping at the border
    #[arg(short, long)]
    pub wrap: bool,

    /// Edge length of one rendered tile in pixels
    #[arg(short, long, default_value_t = DEFAULT_PIXELS_PER_TILE)]
    pub pixels_per_tile: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one generation run: catalog, grid, solve, render, export
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the tile set, solve the grid, and export the rendered PNG
    ///
    /// # Errors
    ///
    /// Returns an error on invalid parameters, an exhausted search space,
    /// or a failed image export.
    pub fn run(&self) -> Result<()> {
        self.validate()?;

        let mut tile_set = self.build_tile_set();
        tile_set.build_adjacency_rules();

        let topology = if self.cli.wrap {
            Topology::Toroidal
        } else {
            Topology::Clamped
        };
        let grid = Grid::new(&tile_set, self.cli.rows, self.cli.cols, topology)?;

        let mut selector = RandomSelector::new(self.cli.seed);
        let mut progress = self
            .cli
            .should_show_progress()
            .then(|| SolveProgress::new(grid.cell_count()));

        let solved = solve_grid(grid, &mut selector, &mut progress);
        if let Some(bar) = &progress {
            bar.finish();
        }

        let unsolvable = || SolverError::Unsolvable {
            rows: self.cli.rows,
            cols: self.cli.cols,
            tile_count: tile_set.tile_count(),
        };
        let solved = solved.ok_or_else(unsolvable)?;
        let solution = solved.solution().ok_or_else(unsolvable)?;

        let layers = assemble_layers(&solution, &tile_set);
        export_layers_as_png(
            &layers,
            self.cli.rows,
            self.cli.cols,
            tile_set.tile_size(),
            self.cli.pixels_per_tile,
            &self.cli.output,
        )
    }

    fn validate(&self) -> Result<()> {
        if self.cli.motif == Motif::Pipes && self.cli.colors == 0 {
            return Err(invalid_parameter(
                "colors",
                &self.cli.colors,
                &"the pipes motif needs at least one color",
            ));
        }
        if self.cli.pixels_per_tile == 0 {
            return Err(invalid_parameter(
                "pixels-per-tile",
                &self.cli.pixels_per_tile,
                &"tiles cannot be rendered at zero size",
            ));
        }
        Ok(())
    }

    fn build_tile_set(&self) -> TileSet<Drawing> {
        match self.cli.motif {
            Motif::Pipes => motifs::pipes(self.cli.colors, self.cli.blank_weight),
            Motif::Angles => motifs::angles(),
        }
    }
}
