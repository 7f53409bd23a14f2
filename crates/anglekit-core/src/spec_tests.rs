use super::spec::*;

#[test]
fn record_spec_shape() {
    let spec = PredicateSpec::record("graphql.Directive", 2, &["name", "arguments"]);
    assert_eq!(spec.name(), "graphql.Directive");
    assert_eq!(spec.version(), 2);
    assert_eq!(spec.reference(), "graphql.Directive.2");
    assert!(!spec.is_union());
    assert!(!spec.is_positional());
    assert!(spec.is_shareable());

    let names: Vec<_> = spec.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["name", "arguments"]);
    assert!(spec.field("name").is_some());
    assert!(spec.field("missing").is_none());
}

#[test]
fn positional_spec_shape() {
    let spec = PredicateSpec::positional("graphql.Value", 2, &["arg"]);
    assert!(spec.is_positional());
    assert!(spec.fields()[0].is_positional());
}

#[test]
fn union_spec_shape() {
    let spec = PredicateSpec::union("graphql.Declaration", 2, &["query_", "fragment_"]);
    assert!(spec.is_union());
    assert!(spec.variants().contains("query_"));
    assert!(spec.variants().contains("fragment_"));
    // Tags double as fields.
    assert!(spec.field("query_").is_some());
}

#[test]
fn anonymous_clears_shareable() {
    let spec = PredicateSpec::record("graphql.SelectionSet", 2, &["fields"]).anonymous();
    assert!(!spec.is_shareable());
}

#[test]
fn validated_rejects_bad_names() {
    let err = PredicateSpec::validated("graphql..Directive", 2, vec![], &[], true).unwrap_err();
    assert_eq!(
        err,
        SpecError::InvalidPredicateName("graphql..Directive".to_owned())
    );

    let err = PredicateSpec::validated(
        "graphql.Directive",
        2,
        vec![FieldSpec::new("1bad", false)],
        &[],
        true,
    )
    .unwrap_err();
    assert!(matches!(err, SpecError::InvalidFieldName { .. }));
}

#[test]
fn validated_rejects_duplicate_fields() {
    let err = PredicateSpec::validated(
        "graphql.Directive",
        2,
        vec![FieldSpec::new("name", false), FieldSpec::new("name", false)],
        &[],
        true,
    )
    .unwrap_err();
    assert!(matches!(err, SpecError::DuplicateField { .. }));
}

#[test]
fn validated_rejects_positional_arity() {
    let err = PredicateSpec::validated(
        "graphql.Value",
        2,
        vec![FieldSpec::new("arg", true), FieldSpec::new("other", false)],
        &[],
        true,
    )
    .unwrap_err();
    assert_eq!(err, SpecError::PositionalArity("graphql.Value".to_owned()));
}

#[test]
fn validated_adds_variant_tags_as_fields() {
    let spec = PredicateSpec::validated(
        "testinfra.AssemblyId",
        4,
        vec![],
        &["testId".to_owned(), "fbId".to_owned()],
        true,
    )
    .unwrap();
    assert!(spec.is_union());
    let names: Vec<_> = spec.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["testId", "fbId"]);
}

#[test]
fn name_validators() {
    assert!(is_valid_predicate_name("graphql.Directive"));
    assert!(is_valid_predicate_name("code.flow.Entity"));
    assert!(!is_valid_predicate_name(""));
    assert!(!is_valid_predicate_name(".Directive"));
    assert!(!is_valid_predicate_name("graphql.2bad"));

    assert!(is_valid_field_name("selectionSet"));
    assert!(is_valid_field_name("module_"));
    assert!(!is_valid_field_name("3rd"));
    assert!(!is_valid_field_name("with space"));

    assert!(is_valid_variable("X0"));
    assert!(is_valid_variable("Decl"));
    assert!(!is_valid_variable("x0"));
    assert!(!is_valid_variable("_X"));
    assert!(!is_valid_variable(""));
}
