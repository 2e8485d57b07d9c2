mod args;
mod batch;

use std::error::Error;

use args::Args;
use clap::Parser;
use markmerge_core::logging::enable_tracing;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    if args.tracing {
        enable_tracing(args.debug);
    }

    let written = batch::run(&args.fixed, &args.semi, &args.output_dir)?;
    info!(count = written.len(), "Batch merge complete");
    Ok(())
}
