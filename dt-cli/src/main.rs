//! dt-cli - Command line tool for the drama timeline.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dt-cli",
    version,
    about = "Drama timeline toolkit: render timelines, aggregate play data"
)]
struct Cli {
    #[command(subcommand)]
    command: dt_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("dt-cli {}", env!("CARGO_PKG_VERSION"));
    dt_cmd::run(cli.command)
}
