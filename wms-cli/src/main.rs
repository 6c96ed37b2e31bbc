//! WMS CLI - inspect shelf listings the way the stock pages see them.

use clap::Parser;

#[derive(Parser)]
#[command(name = "wms-cli", version, about = "Warehouse management shelf toolkit")]
struct Cli {
    #[command(subcommand)]
    command: wms_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wms_cmd::run(cli.command).await
}
