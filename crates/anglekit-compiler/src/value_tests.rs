use std::rc::Rc;
use std::sync::Arc;

use anglekit_core::PredicateSpec;

use super::value::{FieldValue, PredicateHandle, PredicateQuery};
use crate::literal::Literal;

fn directive_spec() -> Arc<PredicateSpec> {
    Arc::new(PredicateSpec::record(
        "graphql.Directive",
        2,
        &["name", "arguments", "locations"],
    ))
}

#[test]
fn conversions_pick_the_right_variant() {
    assert!(matches!(
        FieldValue::from("skipIf"),
        FieldValue::Scalar(Literal::String(_))
    ));
    assert!(matches!(
        FieldValue::from(7u64),
        FieldValue::Scalar(Literal::Nat(7))
    ));
    assert!(matches!(
        FieldValue::from(true),
        FieldValue::Scalar(Literal::Boolean(true))
    ));
    assert!(matches!(
        FieldValue::from(vec![1u64, 2, 3]),
        FieldValue::Sequence(items) if items.len() == 3
    ));
}

#[test]
fn unspecified_is_distinct_from_nothing_and_empty_list() {
    assert!(FieldValue::Unspecified.is_unspecified());
    assert!(!FieldValue::nothing().is_unspecified());
    assert!(!FieldValue::sequence(vec![]).is_unspecified());
}

#[test]
fn query_keeps_caller_field_order() {
    let query = PredicateQuery::new(directive_spec())
        .with_field("locations", FieldValue::sequence(vec![]))
        .with_field("name", "skip".into());
    let names: Vec<&str> = query.fields().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["locations", "name"]);
}

#[test]
fn query_conversion_wraps_as_inline_reference() {
    let value: FieldValue = PredicateQuery::new(directive_spec()).into();
    assert!(matches!(
        value,
        FieldValue::Reference(PredicateHandle::Inline(_))
    ));
}

#[test]
fn shared_handle_preserves_identity() {
    let query = PredicateQuery::new(directive_spec()).shared();
    let a = FieldValue::reference(Rc::clone(&query));
    let b = FieldValue::reference(Rc::clone(&query));
    let (FieldValue::Reference(PredicateHandle::Inline(a)), FieldValue::Reference(PredicateHandle::Inline(b))) =
        (a, b)
    else {
        panic!("expected inline references");
    };
    assert!(Rc::ptr_eq(&a, &b));
}
