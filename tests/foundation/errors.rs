//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use streamline_foundation::{ContainerKind, Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_validation() {
    let err = Error::validation(-5, 0, 100);
    assert!(matches!(err.kind, ErrorKind::Validation { value: -5, .. }));
    assert!(format!("{err}").contains("-5"));
}

#[test]
fn error_immutable_violation() {
    let err = Error::immutable_violation("extend", ContainerKind::ImmutableUniqueSet);
    let msg = format!("{err}");
    assert!(msg.contains("extend"));
    assert!(msg.contains("immutable unique set"));
}

#[test]
fn error_division_by_zero() {
    let err = Error::division_by_zero();
    assert_eq!(format!("{err}"), "division by zero");
}

#[test]
fn error_transform_failure() {
    let err = Error::transform_failure("filter", 7, "predicate exploded");
    if let ErrorKind::TransformFailure {
        stage,
        index,
        message,
    } = &err.kind
    {
        assert_eq!(*stage, "filter");
        assert_eq!(*index, 7);
        assert_eq!(message, "predicate exploded");
    } else {
        panic!("expected TransformFailure");
    }
}

#[test]
fn error_index_out_of_bounds() {
    let err = Error::index_out_of_bounds(4, 2);
    assert_eq!(format!("{err}"), "index out of bounds: 4 (length 2)");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_optional() {
    assert!(Error::division_by_zero().context.is_none());
}

#[test]
fn context_display_lists_frames() {
    let ctx = ErrorContext::new()
        .with_operation("map")
        .with_frame("titles")
        .with_frame("books");
    let shown = format!("{ctx}");
    assert!(shown.starts_with("in map"));
    assert!(shown.contains("  in titles"));
    assert!(shown.contains("  in books"));
}
