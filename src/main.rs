//! CLI entry point for the tile grid session simulator

use clap::Parser;
use tilegrid::io::cli::{Cli, SessionRunner};
use tracing_subscriber::EnvFilter;

fn main() -> tilegrid::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let runner = SessionRunner::new(cli);
    runner.run().map(|_| ())
}
