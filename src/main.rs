use clap::Parser;

use bodegacats::init_logging;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let args = cli::Cli::parse();
    cli::run(args).await
}
