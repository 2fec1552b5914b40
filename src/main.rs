//! CLI entry point for the cell-creature portrait generator

use cellface::io::cli::{Cli, GenerationRunner};
use clap::Parser;

fn main() -> cellface::Result<()> {
    let cli = Cli::parse();
    let mut runner = GenerationRunner::new(cli);
    runner.run()
}
