//! CLI argument parsing with clap

use clap::Parser;
use dartup_core::{Channel, RunConfig};

/// dart-up - keep a local Dart SDK installation up to date
#[derive(Parser, Debug)]
#[command(name = "dart-up")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "By default, dart-up uses the \"dev\" channel. The SDK is always \
downloaded. Dartium can be excluded while the docs can be included.")]
pub struct Cli {
    /// Use the stable channel
    #[arg(short, long)]
    pub stable: bool,

    /// Include docs
    #[arg(short, long)]
    pub docs: bool,

    /// Exclude Dartium
    #[arg(short = 'D', long)]
    pub no_dartium: bool,

    /// Update even if the version numbers are identical
    #[arg(short, long)]
    pub force: bool,

    /// Report whether an update is available without installing anything
    #[arg(long)]
    pub check: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The immutable configuration for this run
    pub fn run_config(&self) -> RunConfig {
        let channel = if self.stable {
            Channel::Stable
        } else {
            Channel::Dev
        };
        RunConfig::new(channel, !self.no_dartium, self.docs, self.force)
    }
}
