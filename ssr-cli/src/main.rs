//! SSR CLI - Command line tool for ski resort snow reports and favorites.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ssr-cli",
    version,
    about = "Ski resort snow report toolkit"
)]
struct Cli {
    #[command(flatten)]
    config: ssr_cmd::config::Config,

    #[command(subcommand)]
    command: ssr_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("data dir: {}", cli.config.data_dir().display());
    ssr_cmd::run(&cli.config, cli.command).await
}
