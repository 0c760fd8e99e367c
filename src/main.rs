use brand::cli::{Cli, Commands};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cover(args) => brand::cli::cover::run(args)?,
        Commands::Icon(args) => brand::cli::icon::run(args)?,
        Commands::All(args) => brand::cli::all::run(args)?,
    }

    Ok(())
}
