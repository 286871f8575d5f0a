// Unit tests for error module
// Tests serialization and the console-facing message

use crate::error::AtomicBlogError;

use blog_core::error::{ArchiveError, StateError};

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Tests that errors can be serialized.
///
/// **WHY THIS MATTERS**: Errors are written to the log file as structured data and
/// must keep their variant name and message.
///
/// **BUG THIS CATCHES**: Would catch if someone removes the `#[derive(Serialize)]`
/// or adds a non-serializable field.
#[test]
fn given_atomic_blog_error_when_serialized_then_succeeds() {
    // GIVEN: An AtomicBlogError
    let err = AtomicBlogError::InvalidInput {
        message: String::from("Test"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Serializing to JSON
    let result = serde_json::to_string(&err);

    // THEN: Should succeed
    assert!(result.is_ok(), "Error should be serializable");

    // AND: Should contain the error data
    let json = result.unwrap();
    assert!(
        json.contains("InvalidInput"),
        "JSON should contain variant name"
    );
    assert!(json.contains("Test"), "JSON should contain message");
}

/// **VALUE**: Verifies the console message omits the source location.
///
/// **WHY THIS MATTERS**: Users see `message()`; the log gets the full `Display`.
///
/// **BUG THIS CATCHES**: Would catch `message()` returning the formatted error.
#[test]
fn given_invalid_input_when_getting_message_then_location_is_not_included() {
    // GIVEN: An invalid input error
    let err = AtomicBlogError::invalid_input("Unknown command `foo`");

    // THEN: The message is bare, the display carries the kind and location
    assert_eq!(err.message(), "Unknown command `foo`");
    let display = err.to_string();
    assert!(display.starts_with("Invalid Input Error: Unknown command `foo` ["));
    assert!(display.contains("error.rs"));
}

/// **VALUE**: Verifies core errors convert into the `Core` variant.
///
/// **WHY THIS MATTERS**: Command handlers rely on `?` / `From` for state and archive errors.
///
/// **BUG THIS CATCHES**: Would catch a conversion into the wrong variant.
#[test]
fn given_core_errors_when_converted_then_core_variant() {
    // GIVEN: A state error and an archive error
    let state_err = StateError::Actor {
        message: String::from("State actor died"),
        location: ErrorLocation::from(Location::caller()),
    };
    let archive_err = ArchiveError::index_out_of_range(5, 2);

    // WHEN: Converting
    let from_state = AtomicBlogError::from(state_err);
    let from_archive = AtomicBlogError::from(archive_err);

    // THEN: Both are Core errors carrying the inner message
    assert!(matches!(from_state, AtomicBlogError::Core { .. }));
    assert!(from_state.message().contains("State actor died"));
    assert!(matches!(from_archive, AtomicBlogError::Core { .. }));
}
