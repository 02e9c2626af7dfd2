mod application;
mod domain;
mod infrastructure;
mod presentation;

use clap::Parser;
use infrastructure::ConfigRepository;
use presentation::cli::{self, Cli};
use presentation::services::init_logging;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_repository = ConfigRepository::new();
    let ok = cli::run(cli, &config_repository).await?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
