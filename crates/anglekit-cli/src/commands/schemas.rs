use std::path::Path;

use anglekit_core::{PredicateSpec, SchemaRegistry};

pub fn run(registry_path: &Path) {
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

    for spec in registry.iter() {
        println!("{}", describe(spec));
    }
    eprintln!("{} predicates", registry.len());
}

fn describe(spec: &PredicateSpec) -> String {
    let fields = spec
        .fields()
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ");
    let shape = if spec.is_union() {
        format!("union {{ {fields} }}")
    } else if spec.is_positional() {
        format!("key {fields}")
    } else if spec.fields().is_empty() {
        "record {}".to_owned()
    } else {
        format!("record {{ {fields} }}")
    };
    let inner = if spec.is_shareable() { "" } else { " (inner)" };
    format!("{} {}{}", spec.reference(), shape, inner)
}
