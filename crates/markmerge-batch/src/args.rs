use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Fixed landmark files, one per subject
    #[arg(long = "fixed", value_name = "FILE")]
    pub fixed: Vec<PathBuf>,

    /// Semi-landmark files, one per subject, in the same order as the fixed files
    #[arg(long = "semi", value_name = "FILE")]
    pub semi: Vec<PathBuf>,

    /// Directory the merged landmark files are written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Enable tracing output
    #[arg(long)]
    pub tracing: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
