use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "anglekit", bin_name = "anglekit")]
#[command(about = "Compile typed fact queries to Angle text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a schema registry and list its predicates
    Schemas {
        /// Path to registry JSON
        #[arg(value_name = "REGISTRY")]
        registry: PathBuf,
    },

    /// Compile a JSON query document against a registry
    #[command(after_help = r#"EXAMPLES:
  anglekit compile schemas.json query.json
  anglekit compile schemas.json -q '{"predicate": "graphql.Directive", "fields": {"arguments": {"list": []}}}'"#)]
    Compile {
        /// Path to registry JSON
        #[arg(value_name = "REGISTRY")]
        registry: PathBuf,

        /// Path to the query document (or use --query for inline text)
        #[arg(value_name = "QUERY")]
        file: Option<PathBuf>,

        /// Inline query document text
        #[arg(long, short = 'q', value_name = "JSON", conflicts_with = "file")]
        query: Option<String>,
    },
}
