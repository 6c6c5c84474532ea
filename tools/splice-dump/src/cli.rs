//! CLI definitions using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splice-dump")]
#[command(about = "Print the contents of SPLICE drum pattern files")]
#[command(version)]
pub struct Cli {
    /// SPLICE files to decode
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only print version, tempo and track count
    #[arg(short, long)]
    pub summary: bool,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
