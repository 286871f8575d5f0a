use crate::{ModelError, Post, PostBuilder};

/// **VALUE**: Verifies that a builder with both fields produces the expected Post.
///
/// **WHY THIS MATTERS**: The add form turns its two text fields into a Post through
/// this builder. If valid input is rejected, users can never add a post.
///
/// **BUG THIS CATCHES**: Would catch if fields are swapped or validation is inverted.
#[test]
fn given_title_and_body_when_building_then_returns_post() {
    // GIVEN: Builder with both fields set
    let builder = PostBuilder::default()
        .with_title("Hello")
        .with_body("World");

    // WHEN: Building
    let post = builder.build().unwrap();

    // THEN: Post carries both values unchanged
    assert_eq!(post, Post::new("Hello", "World"));
}

/// **VALUE**: Verifies that an empty body is rejected.
///
/// **WHY THIS MATTERS**: Submissions with an empty body must never reach the store.
///
/// **BUG THIS CATCHES**: Would catch if the empty-string check for body is removed.
#[test]
fn given_empty_body_when_building_then_returns_validation_error() {
    // GIVEN: Builder with empty body
    let builder = PostBuilder::default().with_title("Hello").with_body("");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Body cannot be empty");
        }
    }
}

/// **VALUE**: Verifies that an empty title is rejected.
///
/// **WHY THIS MATTERS**: Every post in the store has a non-empty title.
///
/// **BUG THIS CATCHES**: Would catch if only the body is validated.
#[test]
fn given_empty_title_when_building_then_returns_validation_error() {
    // GIVEN: Builder with empty title
    let builder = PostBuilder::default().with_title("").with_body("World");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Title cannot be empty");
        }
    }
}

/// **VALUE**: Verifies that missing fields are reported as required.
///
/// **WHY THIS MATTERS**: A builder that silently defaults a missing field to "" would
/// bypass the empty check in a later refactor.
///
/// **BUG THIS CATCHES**: Would catch if `Option` fields are unwrapped with defaults.
#[test]
fn given_missing_fields_when_building_then_reports_required_field() {
    // GIVEN: Builders missing one field each
    let missing_title = PostBuilder::default().with_body("World").build();
    let missing_body = PostBuilder::default().with_title("Hello").build();

    // THEN: Each names the missing field
    match missing_title.unwrap_err() {
        ModelError::Validation { message, .. } => assert_eq!(message, "Title is required"),
    }
    match missing_body.unwrap_err() {
        ModelError::Validation { message, .. } => assert_eq!(message, "Body is required"),
    }
}

/// **VALUE**: Verifies that whitespace-only fields are accepted as-is.
///
/// **WHY THIS MATTERS**: The add form only rejects empty fields; it never trims.
///
/// **BUG THIS CATCHES**: Would catch if trimming sneaks into validation and starts
/// discarding submissions that have non-empty fields.
#[test]
fn given_whitespace_fields_when_building_then_keeps_them_untrimmed() {
    // GIVEN: Builder with whitespace-only values
    let post = PostBuilder::default()
        .with_title(" ")
        .with_body("  body ")
        .build()
        .unwrap();

    // THEN: Values are kept untouched
    assert_eq!(post.title, " ");
    assert_eq!(post.body, "  body ");
}

/// **VALUE**: Verifies the searchable text joins title and body with a single space.
///
/// **WHY THIS MATTERS**: The search filter matches against exactly this string.
///
/// **BUG THIS CATCHES**: Would catch if the separator changes, which changes which
/// queries match across the title/body boundary.
#[test]
fn given_post_when_building_searchable_text_then_joins_with_space() {
    // GIVEN: A post
    let post = Post::new("Hyper", "Loop");

    // THEN: Title and body joined by one space
    assert_eq!(post.searchable_text(), "Hyper Loop");
}

/// **VALUE**: Verifies Post serializes with `title` and `body` keys.
///
/// **WHY THIS MATTERS**: Posts appear in JSON log output and config fixtures.
///
/// **BUG THIS CATCHES**: Would catch renamed fields.
#[test]
fn given_post_when_serialized_then_uses_title_and_body_keys() {
    // GIVEN: A post
    let post = Post::new("Fast chip", "runs great");

    // WHEN: Serializing
    let json = serde_json::to_string(&post).unwrap();

    // THEN: Keys match the entity attributes
    assert_eq!(json, r#"{"title":"Fast chip","body":"runs great"}"#);
}
