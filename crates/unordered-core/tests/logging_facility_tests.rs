#![allow(clippy::unwrap_used, clippy::expect_used)]

use unordered_core::errors::{ExError, ExErrorKind};
use unordered_core::logging_facility::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use unordered_core::logging_facility::test_capture::init_test_capture;
use unordered_core::report::{assertrepr_compare, CompareOp, ReportConfig};
use unordered_core::{log_op_end, log_op_error, log_op_start, make, unordered, Expected, Value};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ExError::new(ExErrorKind::Io).with_message("missing fixture");
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1);
    let event = &error_events[0];
    assert_eq!(event.level, unordered_core::tracing::Level::ERROR);
    assert_eq!(event.fields.get("err_code"), Some(&"ERR_IO".to_string()));
    assert_eq!(event.fields.get("err_kind"), Some(&"Io".to_string()));
}

#[test]
fn test_make_logs_start_and_end() {
    let capture = init_test_capture();

    let list = unordered!(1, 2, 3).unwrap();
    assert_eq!(list.len(), 3);

    capture.assert_event_exists("unordered_make", EVENT_START);
    capture.assert_event_exists("unordered_make", EVENT_END);
    let with_len = capture.count_events(|e| {
        e.op.as_deref() == Some("unordered_make")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.get("len").map(String::as_str) == Some("3")
    });
    assert!(with_len >= 1);
}

#[test]
fn test_make_logs_rejected_expected_value() {
    let capture = init_test_capture();

    let result = make(vec![Expected::from(Value::map([("k", 1)]))], None);
    assert!(result.is_err());

    let rejected = capture.count_events(|e| {
        e.op.as_deref() == Some("unordered_make")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get("err_code").map(String::as_str) == Some("ERR_INVALID_EXPECTED_KIND")
    });
    assert!(rejected >= 1, "Should log the rejection as end_error");
}

#[test]
fn test_report_rendering_is_logged() {
    let capture = init_test_capture();

    let left = Value::from(unordered!(7, 8, 9, 9).unwrap());
    let lines = assertrepr_compare(
        &ReportConfig::default(),
        CompareOp::Eq,
        &left,
        &Value::list([7, 8, 9]),
    )
    .unwrap();

    let rendered = capture.count_events(|e| {
        e.fields.get("op").map(String::as_str) == Some("assertrepr_compare")
            && e.fields.get("lines") == Some(&lines.len().to_string())
    });
    assert!(rendered >= 1);
}
