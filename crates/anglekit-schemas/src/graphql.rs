//! Query builders for the `graphql` schema (version 2 throughout).
//!
//! Declarations, type definitions and executable-document structure of
//! GraphQL sources. `SelectionSet` and `Declaration` are inner types of
//! the schema: they render inline and never bind to a query variable.

use crate::macros::{predicates, schema_enum};

predicates! {
    /// A directive applied at a use site, e.g. `@skip(if: $cond)`.
    Directive / DirectiveQuery = record("graphql.Directive", 2) {
        name => "name",
        arguments => "arguments",
    }

    InputObjectTypeDef / InputObjectTypeDefQuery = record("graphql.InputObjectTypeDef", 2) {
        name => "name",
        fields => "fields",
        directives => "directives",
    }

    EnumTypeDef / EnumTypeDefQuery = record("graphql.EnumTypeDef", 2) {
        name => "name",
        values => "values",
        directives => "directives",
    }

    UnionTypeDef / UnionTypeDefQuery = record("graphql.UnionTypeDef", 2) {
        name => "name",
        types => "types",
        directives => "directives",
    }

    /// A field selection inside an executable document.
    Field / FieldQuery = record("graphql.Field", 2) {
        r#type => "type",
        name => "name",
        directives => "directives",
        selection_set => "selectionSet",
        arguments => "arguments",
        alias => "alias",
        loc => "loc",
    }

    ObjectTypeDef / ObjectTypeDefQuery = record("graphql.ObjectTypeDef", 2) {
        name => "name",
        interfaces => "interfaces",
        fields => "fields",
        directives => "directives",
    }

    Argument / ArgumentQuery = record("graphql.Argument", 2) {
        name => "name",
        value => "value",
    }

    /// A directive definition, including the locations it may appear at.
    DirectiveDef / DirectiveDefQuery = record("graphql.DirectiveDef", 2) {
        name => "name",
        argument_defs => "argumentDefs",
        locations => "locations",
    }

    Fragment / FragmentQuery = record("graphql.Fragment", 2) {
        name => "name",
        type_condition => "typeCondition",
        variable_defs => "variableDefs",
        directives => "directives",
        selection_set => "selectionSet",
        loc => "loc",
    }

    ScalarTypeDef / ScalarTypeDefQuery = record("graphql.ScalarTypeDef", 2) {
        name => "name",
        directives => "directives",
    }

    VariableDef / VariableDefQuery = record("graphql.VariableDef", 2) {
        name => "name",
        r#type => "type",
        directives => "directives",
        default_value => "defaultValue",
    }

    /// The name of any top-level declaration.
    DeclarationName / DeclarationNameQuery = positional("graphql.DeclarationName", 2) {
        declaration => "declaration",
    }

    FileDeclarations / FileDeclarationsQuery = record("graphql.FileDeclarations", 2) {
        file => "file",
        span => "span",
        declaration => "declaration",
    }

    DeclarationLocation / DeclarationLocationQuery = record("graphql.DeclarationLocation", 2) {
        declaration => "declaration",
        file => "file",
        span => "span",
    }

    FieldDef / FieldDefQuery = record("graphql.FieldDef", 2) {
        name => "name",
        r#type => "type",
        argument_defs => "argumentDefs",
        directives => "directives",
    }

    InterfaceTypeDef / InterfaceTypeDefQuery = record("graphql.InterfaceTypeDef", 2) {
        name => "name",
        fields => "fields",
        directives => "directives",
    }

    /// A named operation (query, mutation or subscription).
    Query / QueryQuery = record("graphql.Query", 2) {
        name => "name",
        directives => "directives",
        variable_defs => "variableDefs",
        selection_set => "selectionSet",
        loc => "loc",
    }

    InputValueDef / InputValueDefQuery = record("graphql.InputValueDef", 2) {
        name => "name",
        r#type => "type",
        directives => "directives",
        default_value => "defaultValue",
    }

    /// An interned GraphQL source string: names, type refs, literals.
    Value / ValueQuery = positional("graphql.Value", 2) {
        text => "text",
    }

    InlineFragment / InlineFragmentQuery = record("graphql.InlineFragment", 2) {
        inferred_type_condition => "inferredTypeCondition",
        directives => "directives",
        selection_set => "selectionSet",
        type_condition => "typeCondition",
    }

    /// Inner type: the selections under a field, fragment or operation.
    SelectionSet / SelectionSetQuery = record("graphql.SelectionSet", 2).anonymous() {
        fields => "fields",
        inline_fragments => "inlineFragments",
        fragment_spreads => "fragmentSpreads",
    }

    /// Inner sum type over the five declaration kinds. The trailing
    /// underscores are part of the schema's tag names.
    Declaration / DeclarationQuery = union("graphql.Declaration", 2).anonymous() {
        query_ => "query_",
        fragment_ => "fragment_",
        field_ => "field_",
        enum_ => "enum_",
        directive_ => "directive_",
    }
}

schema_enum! {
    /// Where a directive definition may be applied.
    DirectiveDefLocation {
        Query => "QUERY",
        Mutation => "MUTATION",
        Subscription => "SUBSCRIPTION",
        Field => "FIELD",
        FragmentDefinition => "FRAGMENT_DEFINITION",
        FragmentSpread => "FRAGMENT_SPREAD",
        InlineFragment => "INLINE_FRAGMENT",
        Schema => "SCHEMA",
        Scalar => "SCALAR",
        Object => "OBJECT",
        FieldDefinition => "FIELD_DEFINITION",
        ArgumentDefinition => "ARGUMENT_DEFINITION",
        Interface => "INTERFACE",
        Union => "UNION",
        Enum => "ENUM",
        EnumValue => "ENUM_VALUE",
        InputObject => "INPUT_OBJECT",
        InputFieldDefinition => "INPUT_FIELD_DEFINITION",
    }
}
