mod cli;
mod config;
mod execution;
mod files;
mod identity;
mod output;
mod prompt;
mod template;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.execute() {
        output::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
