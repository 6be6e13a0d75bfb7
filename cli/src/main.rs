mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};
use commands::{render, roster, viewbox};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Commands::Viewbox(args) => viewbox::run(&cli, args),
        Commands::Render(args) => render::run(&cli, args),
        Commands::Roster(args) => roster::run(&cli, args),
        #[cfg(feature = "download")]
        Commands::Fetch(args) => commands::fetch::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
