use clap::Parser;

use account_service::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => account_service::cli::serve::run().await,
    }
}
