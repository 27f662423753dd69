use anyhow::Result;
use clap::Parser;

use courtstats::cli::{Cli, Commands};
use courtstats::commands::{city, init_logging, judge, ring};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::City(args) => city::run(&cli, args),
        Commands::Judge(args) => judge::run(&cli, args),
        Commands::Ring(args) => ring::run(&cli, args),
    }
}
