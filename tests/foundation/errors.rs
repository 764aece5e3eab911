//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use quasi_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_length_mismatch() {
    let err = Error::length_mismatch(3, 1);
    assert!(matches!(err.kind, ErrorKind::LengthMismatch { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("3 fragments"));
    assert!(msg.contains("got 1"));
}

#[test]
fn error_parse() {
    let err = Error::parse("unterminated placeholder", 4, 9);
    let msg = format!("{err}");
    assert_eq!(msg, "parse error at 4:9: unterminated placeholder");
}

#[test]
fn error_unbound_name() {
    let err = Error::unbound_name("player");
    assert_eq!(err.kind, ErrorKind::UnboundName("player".to_string()));
    assert!(format!("{err}").contains("player"));
}

#[test]
fn error_limit_exceeded() {
    let err = Error::limit_exceeded(8, 9);
    let msg = format!("{err}");
    assert!(msg.contains('8'));
    assert!(msg.contains('9'));
}

#[test]
fn error_invalid_escape() {
    let err = Error::new(ErrorKind::InvalidEscape { fragment: 2 });
    assert_eq!(format!("{err}"), "invalid escape sequence in fragment 2");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_optional() {
    assert!(Error::internal("x").context.is_none());
}

#[test]
fn context_does_not_change_message() {
    let err = Error::unbound_name("who").with_context(ErrorContext::new().with_position(1, 4));
    assert_eq!(format!("{err}"), "unbound name: who");
    assert_eq!(err.context.unwrap().to_string(), "at <template>:1:4");
}

#[test]
fn errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::internal("x"));
}
