use indoc::indoc;

use super::registry::*;

const SAMPLE_JSON: &str = indoc! {r#"
    [
        {
            "predicate": "graphql.Directive",
            "version": 2,
            "fields": [{"name": "name"}, {"name": "arguments"}]
        },
        {
            "predicate": "graphql.Value",
            "version": 2,
            "fields": [{"name": "arg", "positional": true}]
        },
        {
            "predicate": "graphql.Declaration",
            "version": 2,
            "variants": ["query_", "fragment_", "field_", "enum_", "directive_"],
            "shareable": false
        },
        {
            "predicate": "testinfra.CoveredFileTestIds",
            "version": 4,
            "fields": [{"name": "file"}, {"name": "assemblies"}]
        },
        {
            "predicate": "testinfra.CoveredFileTestIds",
            "version": 5,
            "fields": [{"name": "file"}, {"name": "assemblies"}]
        }
    ]
"#};

#[test]
fn parse_raw_entries() {
    let raw = parse_registry(SAMPLE_JSON).unwrap();
    assert_eq!(raw.len(), 5);

    let directive = &raw[0];
    assert_eq!(directive.predicate, "graphql.Directive");
    assert_eq!(directive.version, 2);
    assert!(directive.shareable);
    assert!(!directive.fields[0].positional);

    let value = &raw[1];
    assert!(value.fields[0].positional);

    let declaration = &raw[2];
    assert!(!declaration.shareable);
    assert_eq!(declaration.variants.len(), 5);
}

#[test]
fn build_registry() {
    let registry = SchemaRegistry::from_json(SAMPLE_JSON).unwrap();
    assert_eq!(registry.len(), 5);

    let directive = registry.get("graphql.Directive", 2).unwrap();
    assert_eq!(directive.reference(), "graphql.Directive.2");
    assert!(registry.get("graphql.Directive", 3).is_none());

    let declaration = registry.get("graphql.Declaration", 2).unwrap();
    assert!(declaration.is_union());
    assert!(!declaration.is_shareable());
}

#[test]
fn versions_are_independent_entries() {
    let registry = SchemaRegistry::from_json(SAMPLE_JSON).unwrap();
    let v4 = registry.get("testinfra.CoveredFileTestIds", 4).unwrap();
    let v5 = registry.get("testinfra.CoveredFileTestIds", 5).unwrap();
    assert_eq!(v4.reference(), "testinfra.CoveredFileTestIds.4");
    assert_eq!(v5.reference(), "testinfra.CoveredFileTestIds.5");
    assert_eq!(
        registry.latest("testinfra.CoveredFileTestIds").unwrap().version(),
        5
    );
}

#[test]
fn duplicate_name_version_is_rejected() {
    let json = indoc! {r#"
        [
            {"predicate": "testinfra.TestId", "version": 1,
             "fields": [{"name": "arg", "positional": true}]},
            {"predicate": "testinfra.TestId", "version": 1,
             "fields": [{"name": "arg", "positional": true}]}
        ]
    "#};
    let err = SchemaRegistry::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::DuplicateSpec { ref name, version: 1 } if name == "testinfra.TestId"
    ));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(SchemaRegistry::from_json("{not json").is_err());
    assert!(parse_registry(r#"[{"predicate": "p"}]"#).is_err());
}
