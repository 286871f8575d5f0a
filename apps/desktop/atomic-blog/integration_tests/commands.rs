use atomic_blog::commands::{archive, posts};
use atomic_blog::error::AtomicBlogError;

use blog_core::archive::Archive;
use blog_core::state::BlogState;

use models::Post;

// ============================================================================
// Integration tests for UI event handlers + blog-core state
// ============================================================================

/// **VALUE**: Adding through the form prepends the post.
///
/// **WHY THIS MATTERS**: Newest-first is the only ordering the blog has.
///
/// **BUG THIS CATCHES**: Would catch the handler appending instead of prepending.
#[tokio::test]
async fn given_empty_blog_when_submitting_post_then_it_is_the_only_post() {
    // GIVEN: Empty blog
    let state = BlogState::new();

    // WHEN: Submitting {Hello, World}
    let snapshot = posts::submit_post(&state, "Hello", "World")
        .await
        .unwrap()
        .expect("complete form should add a post");

    // THEN
    assert_eq!(snapshot.posts, vec![Post::new("Hello", "World")]);
    assert_eq!(state.posts().await, vec![Post::new("Hello", "World")]);
}

/// **VALUE**: A submission with an empty body leaves the store unchanged.
///
/// **WHY THIS MATTERS**: Incomplete forms are silently ignored, not reported.
///
/// **BUG THIS CATCHES**: Would catch an empty post being stored, or an error surfacing.
#[tokio::test]
async fn given_existing_posts_when_submitting_empty_body_then_store_unchanged() {
    // GIVEN: One existing post
    let state = BlogState::with_posts(vec![Post::new("Existing", "post")]);

    // WHEN: Submitting with an empty body, then with an empty title
    let empty_body = posts::submit_post(&state, "Title", "").await.unwrap();
    let empty_title = posts::submit_post(&state, "", "Body").await.unwrap();

    // THEN: Both discarded
    assert!(empty_body.is_none());
    assert!(empty_title.is_none());
    assert_eq!(state.posts().await, vec![Post::new("Existing", "post")]);
    assert_eq!(state.visible_posts().revision, 0);
}

/// **VALUE**: Searching filters the view but not the store.
///
/// **WHY THIS MATTERS**: The query is a view concern; clearing it must show everything again.
///
/// **BUG THIS CATCHES**: Would catch the filter being applied destructively.
#[tokio::test]
async fn given_two_posts_when_searching_fast_then_only_fast_chip_visible() {
    // GIVEN
    let state = BlogState::with_posts(vec![
        Post::new("Fast chip", "runs great"),
        Post::new("Slow bus", "lags"),
    ]);

    // WHEN
    let snapshot = posts::set_query(&state, "fast").await.unwrap();

    // THEN
    assert_eq!(snapshot.posts, vec![Post::new("Fast chip", "runs great")]);
    assert_eq!(state.posts().await.len(), 2);

    // AND: Clearing the query shows both again
    let snapshot = posts::set_query(&state, "").await.unwrap();
    assert_eq!(snapshot.count(), 2);
}

/// **VALUE**: Clearing empties the store, and clearing again is harmless.
///
/// **WHY THIS MATTERS**: The button can be pressed at any time.
///
/// **BUG THIS CATCHES**: Would catch an error on clearing an empty store.
#[tokio::test]
async fn given_posts_when_clearing_twice_then_empty_both_times() {
    let state = BlogState::with_posts(vec![Post::new("a", "b")]);

    let first = posts::clear_posts(&state).await.unwrap();
    let second = posts::clear_posts(&state).await.unwrap();

    assert_eq!(first.total, 0);
    assert_eq!(second.total, 0);
    assert!(state.posts().await.is_empty());
}

/// **VALUE**: Copying from the archive requires the panel to be shown.
///
/// **WHY THIS MATTERS**: The "Add as new post" buttons only exist on the visible panel.
///
/// **BUG THIS CATCHES**: Would catch copies from a hidden archive reaching the store.
#[tokio::test]
async fn given_hidden_archive_when_adding_archive_post_then_invalid_input() {
    // GIVEN: Hidden archive
    let state = BlogState::new();
    let mut archive = Archive::with_posts(vec![Post::new("Old", "news")], false);

    // WHEN: Copying while hidden
    let result = archive::add_archive_post(&state, &archive, 0).await;

    // THEN
    assert!(matches!(result, Err(AtomicBlogError::InvalidInput { .. })));
    assert!(state.posts().await.is_empty());

    // WHEN: Showing the archive and copying again
    assert!(archive::toggle_archive(&mut archive));
    let snapshot = archive::add_archive_post(&state, &archive, 0).await.unwrap();

    // THEN: The post is copied and the archive keeps it
    assert_eq!(snapshot.posts, vec![Post::new("Old", "news")]);
    assert_eq!(archive.len(), 1);
}

/// **VALUE**: An out-of-range archive index is reported with the archive size.
///
/// **WHY THIS MATTERS**: Users type archive numbers by hand.
///
/// **BUG THIS CATCHES**: Would catch a panic on indexing past the end.
#[tokio::test]
async fn given_visible_archive_when_index_out_of_range_then_invalid_input() {
    let state = BlogState::new();
    let archive = Archive::with_posts(vec![Post::new("Old", "news")], true);

    let err = archive::add_archive_post(&state, &archive, 4)
        .await
        .unwrap_err();

    assert!(matches!(err, AtomicBlogError::InvalidInput { .. }));
    assert_eq!(err.message(), "No archive post #5 (archive holds 1 posts)");
}
