//! Annonce de Lola CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use annonce_lola::cli::{
    app::run_announce,
    args::{AnnounceOptions, Cli},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Delivery failures are diagnosed at debug level only; by default the
    // process stays quiet and speaks through its exit status.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = AnnounceOptions { stdout: cli.stdout };

    run_announce(options).await
}
