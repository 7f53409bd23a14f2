//! Query builders for the `code.flow` schema.

use crate::macros::predicates;

predicates! {
    /// Inner sum type: a Flow code entity is a declaration or a module.
    Entity / EntityQuery = union("code.flow.Entity", 2).anonymous() {
        decl => "decl",
        module_ => "module_",
    }
}
