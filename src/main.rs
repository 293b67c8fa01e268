use bitmix::cli::{Cli, Commands};
use bitmix::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Mix(args) => bitmix::cli::mix::run(args, &printer)?,
        Commands::Table(args) => bitmix::cli::table::run(args, &printer)?,
        Commands::Completions(args) => bitmix::cli::completions::run(args)?,
    }

    Ok(())
}
