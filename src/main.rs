//! CLI entry point for the wave function collapse pattern generator

use clap::Parser;
use wavetile::io::cli::{Cli, Runner};

fn main() -> wavetile::Result<()> {
    let cli = Cli::parse();
    Runner::new(cli).run()
}
