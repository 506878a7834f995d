//! CLI entry point for the garden bed layout engine

use bedplan::io::cli::{Cli, RequestProcessor};
use clap::Parser;

fn main() -> bedplan::Result<()> {
    let cli = Cli::parse();
    let processor = RequestProcessor::new(cli);
    processor.process()
}
