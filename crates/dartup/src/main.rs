//! dart-up - command-line updater for the Dart SDK
//!
//! Compares the locally recorded version against the latest release on the
//! selected Dart archive channel and, when they differ, downloads and
//! unpacks the selected artifact archives concurrently.

mod cli;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dartup_core::Platform;
use dartup_update::{UpdateOutcome, Updater};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    // This must be done before any TLS operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    // Pre-flight host check, before any network or filesystem activity.
    let platform = Platform::detect()?;

    let config = cli.run_config();
    let updater = Updater::new(config, platform);

    let outcome = if cli.check {
        let spinner = output::spinner("Checking for updates...");
        let outcome = updater.check().await;
        spinner.finish_and_clear();
        outcome?
    } else {
        updater.run().await?
    };

    match outcome {
        UpdateOutcome::UpToDate { installed } => {
            output::info(&format!("{} is already installed.", installed.label()));
            output::info("Nothing to update.");
        }
        UpdateOutcome::UpdateAvailable { local, remote } => {
            if local.is_installed() {
                output::info(&format!(
                    "Update available: [{}] -> [{}]",
                    local.label(),
                    remote.label()
                ));
            } else {
                output::info(&format!(
                    "Latest {} version is [{}]; nothing installed yet.",
                    config.channel,
                    remote.label()
                ));
            }
            output::info("Run dart-up without --check to install it.");
        }
        UpdateOutcome::Installed {
            installed,
            artifacts,
            ..
        } => {
            let names: Vec<&str> = artifacts.iter().map(|kind| kind.name()).collect();
            output::success(&format!(
                "[{}] successfully updated to {}!",
                names.join(", "),
                installed.label()
            ));
        }
    }

    Ok(())
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
