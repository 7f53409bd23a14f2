use super::literal::Literal;
use crate::error::CompileError;

#[test]
fn nat_renders_decimal() {
    assert_eq!(Literal::Nat(0).render().unwrap(), "0");
    assert_eq!(Literal::Nat(42).render().unwrap(), "42");
    assert_eq!(
        Literal::Nat(u64::MAX).render().unwrap(),
        "18446744073709551615"
    );
}

#[test]
fn booleans() {
    assert_eq!(Literal::Boolean(true).render().unwrap(), "true");
    assert_eq!(Literal::Boolean(false).render().unwrap(), "false");
}

#[test]
fn plain_string_is_quoted() {
    assert_eq!(
        Literal::String("skipIf".to_owned()).render().unwrap(),
        r#""skipIf""#
    );
}

#[test]
fn string_escapes() {
    let lit = Literal::String("a\"b\\c\nd\re\tf".to_owned());
    assert_eq!(lit.render().unwrap(), r#""a\"b\\c\nd\re\tf""#);
}

#[test]
fn string_keeps_unicode() {
    assert_eq!(
        Literal::String("naïve ünïcode ☂".to_owned()).render().unwrap(),
        "\"naïve ünïcode ☂\""
    );
}

#[test]
fn unescapable_control_character_fails() {
    let err = Literal::String("a\u{0007}b".to_owned()).render().unwrap_err();
    match err {
        CompileError::Encoding { reason, .. } => {
            assert_eq!(reason, "control character U+0007 has no escape");
        }
        other => panic!("expected encoding error, got {other:?}"),
    }
}

#[test]
fn enum_label_renders_bare() {
    assert_eq!(
        Literal::Enum("QUERY".to_owned()).render().unwrap(),
        "QUERY"
    );
    assert_eq!(Literal::Enum("crc32".to_owned()).render().unwrap(), "crc32");
}

#[test]
fn enum_label_must_be_identifier() {
    let err = Literal::Enum("not a label".to_owned()).render().unwrap_err();
    assert!(matches!(err, CompileError::Encoding { .. }));
    assert_eq!(
        err.to_string(),
        "cannot encode enum label `not a label`: not a bare identifier"
    );
}
