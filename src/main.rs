use asciify::cli::{Cli, Commands};
use asciify::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Convert(args) => asciify::cli::convert::run(args, &printer)?,
        Commands::Init(args) => asciify::cli::init::run(args, &printer)?,
        Commands::Completions(args) => asciify::cli::completions::run(args)?,
    }

    Ok(())
}
