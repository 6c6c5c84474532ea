//! splice-dump - print SPLICE drum patterns
//!
//! Decodes each file given on the command line and prints it in the
//! standard pattern text layout. Logging goes to stderr.

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use nether_splice::{Pattern, decode_file};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let mut failed = 0;
    for path in &cli.files {
        match decode_file(path) {
            Ok(pattern) => print!("{}", render(&pattern, cli.summary)),
            Err(e) => {
                tracing::error!("{}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed to decode", failed, cli.files.len());
    }

    Ok(())
}

fn render(pattern: &Pattern, summary: bool) -> String {
    if summary {
        format!(
            "Saved with HW Version: {}\nTempo: {}\nTracks: {}\n",
            pattern.version(),
            pattern.tempo(),
            pattern.track_count()
        )
    } else {
        pattern.to_string()
    }
}
