//! Popchat - tiny terminal chat window
//!
//! Posts each submitted message to the chat backend and renders the reply
//! in a scrolling message list.

use clap::Parser;
use popchat::runner::{run_tui, AppConfig};

/// Popchat - a tiny terminal chat window 💬
#[derive(Parser, Debug)]
#[command(name = "popchat")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose (trace-level) logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        AppConfig {
            debug: args.debug,
            verbose: args.verbose,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    run_tui(AppConfig::from(&args))
}
