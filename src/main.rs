//! Apodwall CLI: `fetch` downloads today's APOD image, `wallpapers` filters a photo collection.

use anyhow::Result;
use apodwall::engine::arg_parser::Cli;
use apodwall::engine::handle_run;
use clap::Parser;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
