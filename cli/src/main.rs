#![deny(missing_docs)]

//! # tfgen CLI
//!
//! Command Line Interface for the discovery-to-Terraform schema generator.
//!
//! Supported Commands:
//! - `generate`: Fetch a discovery document, translate one type, emit a Go schema file.
//! - `list`: Show the named types available in a discovery document.

use clap::{Parser, Subcommand};

use crate::emit::ShellExecutor;
use crate::error::CliResult;

mod emit;
mod error;
mod fetch;
mod generate;
mod list;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Discovery -> Terraform schema generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates a Terraform resource schema file for one discovery type.
    Generate(generate::GenerateArgs),
    /// Lists the named types available in a discovery document.
    List(list::ListArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => {
            // Injecting the real formatter runner
            let executor = ShellExecutor;
            generate::execute(args, &executor)?;
        }
        Commands::List(args) => list::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
