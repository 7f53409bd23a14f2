mod cli;
mod commands;
mod query_json;


use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Schemas { registry } => commands::schemas::run(&registry),
        Command::Compile {
            registry,
            file,
            query,
        } => commands::compile::run(&registry, file.as_deref(), query.as_deref()),
    }
}
