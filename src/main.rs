//! CLI entry point for the cave level generation tool

use cavegen::io::cli::{BatchGenerator, Cli};
use clap::Parser;

fn main() -> cavegen::Result<()> {
    let cli = Cli::parse();
    let mut generator = BatchGenerator::new(cli);
    generator.process()
}
