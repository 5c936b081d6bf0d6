use unordered_core::errors::{ExError, ExErrorKind, UnorderedError};
use unordered_core::{make, unordered, Expected, Kind, UnorderedList, Value};

#[test]
fn test_mapping_rejection_verifiable_by_kind() {
    let err = unordered!(Value::map([("a", 1)])).unwrap_err();
    assert_eq!(err.kind(), Kind::Mapping);

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidExpectedKind);
    assert_eq!(ex_err.code(), "ERR_INVALID_EXPECTED_KIND");
    assert!(ex_err.message().contains("mapping"));
    assert!(ex_err.message().contains(r#"{"a": 1}"#));
}

#[test]
fn test_non_iterable_rejection_distinct_from_mapping() {
    let err = UnorderedList::new(Value::Float(2.5), true).unwrap_err();

    assert_eq!(err.kind(), Kind::Scalar);
    assert_ne!(err.kind(), Kind::Mapping);
    assert_eq!(
        err,
        UnorderedError::InvalidExpectedKind {
            kind: Kind::Scalar,
            repr: "2.5".to_string(),
        }
    );
}

#[test]
fn test_several_arguments_never_fail() {
    let list = make(
        vec![
            Expected::from(Value::map([("a", 1)])),
            Expected::from(Value::Int(1)),
            Expected::once(vec![Value::Int(2)]),
        ],
        None,
    )
    .unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.expected_type(), None);
}

#[test]
fn test_context_builders() {
    let ex_err = ExError::new(ExErrorKind::Serialization)
        .with_op("load_fixture")
        .with_path("expected.json")
        .with_message("fixture is not valid JSON");

    assert_eq!(ex_err.code(), "ERR_SERIALIZATION");
    assert_eq!(ex_err.op(), Some("load_fixture"));
    assert_eq!(ex_err.path(), Some("expected.json"));
    assert_eq!(
        ex_err.to_string(),
        "[ERR_SERIALIZATION] in operation 'load_fixture': fixture is not valid JSON (path: expected.json)"
    );
}

#[test]
fn test_codes_are_unique() {
    let kinds = [
        ExErrorKind::InvalidExpectedKind,
        ExErrorKind::Io,
        ExErrorKind::Serialization,
    ];
    let mut codes: Vec<&str> = kinds.iter().map(ExErrorKind::code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
    assert!(codes.iter().all(|c| c.starts_with("ERR_")));
}
