//! Roster CLI binary.

use anyhow::Result;
use roster::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the roster CLI.
///
/// Uses tokio's `current_thread` runtime; every command runs sequentially.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Example: RUST_LOG=roster=debug roster list
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roster=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting roster CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Roster CLI completed successfully");
    Ok(())
}
