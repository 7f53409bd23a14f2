use std::path::Path;

use anglekit_core::SchemaRegistry;

use crate::query_json::{self, QueryDoc};

pub fn run(registry_path: &Path, file: Option<&Path>, inline: Option<&str>) {
    let json = match std::fs::read_to_string(registry_path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", registry_path.display(), e);
            std::process::exit(1);
        }
    };

    let registry = match SchemaRegistry::from_json(&json) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let document = match (file, inline) {
        (Some(path), None) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("error: cannot read {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        (None, Some(text)) => text.to_owned(),
        _ => {
            eprintln!("error: supply a query file or --query");
            std::process::exit(1);
        }
    };

    let doc: QueryDoc = match serde_json::from_str(&document) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("error: malformed query document: {}", e);
            std::process::exit(1);
        }
    };

    let query = match query_json::to_query(&registry, &doc) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match query.compile() {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
