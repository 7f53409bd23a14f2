use anglekit_compiler::{assemble, CompileError, FieldValue, RefEnv};

use crate::graphql::{
    Declaration, Directive, DirectiveDef, DirectiveDefLocation, Field, Fragment, Query,
    SelectionSet, Value,
};
use crate::src::File;

#[test]
fn directive_with_name_reference() {
    let out = Directive::query()
        .name(Value::query().text("skip"))
        .compile()
        .unwrap();
    assert_eq!(out, r#"graphql.Directive.2 { name: graphql.Value.2 "skip" }"#);
}

#[test]
fn unconstrained_directive_is_a_wildcard() {
    assert_eq!(Directive::query().compile().unwrap(), "graphql.Directive.2 _");
}

#[test]
fn directive_def_with_locations() {
    let out = DirectiveDef::query()
        .name(Value::query().text("skip"))
        .locations(vec![
            DirectiveDefLocation::Field,
            DirectiveDefLocation::InlineFragment,
        ])
        .compile()
        .unwrap();
    insta::assert_snapshot!(
        out,
        @r#"graphql.DirectiveDef.2 { name: graphql.Value.2 "skip", locations: [FIELD, INLINE_FRAGMENT] }"#
    );
}

#[test]
fn selection_set_renders_inline() {
    let out = Query::query()
        .name(Value::query().text("UserProfile"))
        .selection_set(
            SelectionSet::query()
                .fragment_spreads(vec![Value::query().text("UserFields")]),
        )
        .compile()
        .unwrap();
    insta::assert_snapshot!(
        out,
        @r#"graphql.Query.2 { name: graphql.Value.2 "UserProfile", selectionSet: graphql.SelectionSet.2 { fragmentSpreads: [graphql.Value.2 "UserFields"] } }"#
    );
}

#[test]
fn declaration_union_takes_one_variant() {
    let out = Declaration::query()
        .fragment_(Fragment::query().name(Value::query().text("UserFields")))
        .compile()
        .unwrap();
    assert_eq!(
        out,
        r#"graphql.Declaration.2 { fragment_: graphql.Fragment.2 { name: graphql.Value.2 "UserFields" } }"#
    );

    let err = Declaration::query()
        .query_(Query::query())
        .fragment_(Fragment::query())
        .compile()
        .unwrap_err();
    assert!(matches!(err, CompileError::ContractViolation(_)));
}

#[test]
fn shared_value_binds_across_fields() {
    let name = Value::query().text("skip").shared();
    let out = Field::query()
        .name(FieldValue::reference(name.clone()))
        .alias(FieldValue::just(FieldValue::reference(name)))
        .compile()
        .unwrap();
    assert_eq!(
        out,
        r#"graphql.Field.2 { name: (X0 = graphql.Value.2 "skip"), alias: X0 }"#
    );
}

#[test]
fn field_type_label_uses_schema_name() {
    let out = Field::query()
        .r#type(Value::query().text("String!"))
        .compile()
        .unwrap();
    assert_eq!(out, r#"graphql.Field.2 { type: graphql.Value.2 "String!" }"#);
}

#[test]
fn file_reference_shared_through_environment() {
    let mut env = RefEnv::new();
    env.bind("F", File::query().path("www/user.graphql").shared())
        .unwrap();

    let first = crate::graphql::FileDeclarations::query()
        .file(FieldValue::named("F"))
        .build();
    assert_eq!(
        assemble(&mut env, &first).unwrap(),
        r#"graphql.FileDeclarations.2 { file: (F = src.File.1 "www/user.graphql") }"#
    );

    let second = crate::graphql::DeclarationLocation::query()
        .file(FieldValue::named("F"))
        .build();
    assert_eq!(
        assemble(&mut env, &second).unwrap(),
        "graphql.DeclarationLocation.2 { file: F }"
    );
}

#[test]
fn directive_def_location_labels() {
    assert_eq!(DirectiveDefLocation::Query.label(), "QUERY");
    assert_eq!(
        DirectiveDefLocation::InputFieldDefinition.label(),
        "INPUT_FIELD_DEFINITION"
    );
}
