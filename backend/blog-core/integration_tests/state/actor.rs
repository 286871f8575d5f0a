use blog_core::state::{BlogState, StateCommand};

use models::Post;

/// **VALUE**: Verifies apply() returns the snapshot recomputed after the command.
///
/// **WHY THIS MATTERS**: The console waits on apply() before rendering; if the snapshot
/// predates the command, the user sees stale results.
///
/// **BUG THIS CATCHES**: Would catch the actor acknowledging before recomputing.
#[tokio::test]
async fn given_state_when_applying_add_then_snapshot_includes_new_post() {
    // GIVEN: A state with one post
    let state = BlogState::with_posts(vec![Post::new("Old", "post")]);

    // WHEN: Applying AddPost
    let snapshot = state
        .apply(StateCommand::AddPost(Post::new("New", "post")))
        .await
        .unwrap();

    // THEN: New post is first, revision bumped
    assert_eq!(
        snapshot.posts,
        vec![Post::new("New", "post"), Post::new("Old", "post")]
    );
    assert_eq!(snapshot.total, 2);
    assert_eq!(snapshot.revision, 1);
    assert_eq!(state.posts().await, snapshot.posts);
}

/// **VALUE**: Verifies a query change re-derives the visible posts from the full store.
///
/// **WHY THIS MATTERS**: Narrowing then widening the query must bring posts back.
///
/// **BUG THIS CATCHES**: Would catch filtering the previous visible list instead of the store.
#[tokio::test]
async fn given_narrowed_query_when_widening_then_posts_return() {
    // GIVEN: Two posts
    let state = BlogState::with_posts(vec![
        Post::new("Fast chip", "runs great"),
        Post::new("Slow bus", "lags"),
    ]);

    // WHEN: Narrowing to "fast" then clearing the query
    let narrowed = state
        .apply(StateCommand::SetQuery("fast".to_string()))
        .await
        .unwrap();
    let widened = state
        .apply(StateCommand::SetQuery(String::new()))
        .await
        .unwrap();

    // THEN: One post, then both again
    assert_eq!(narrowed.count(), 1);
    assert!(narrowed.is_filtered());
    assert_eq!(widened.count(), 2);
    assert!(!widened.is_filtered());
    assert_eq!(state.query().await, "");
}

/// **VALUE**: Verifies adding a post while a query is active filters the new post too.
///
/// **WHY THIS MATTERS**: The view is recomputed on store changes, not only query changes.
///
/// **BUG THIS CATCHES**: Would catch AddPost skipping the recompute step.
#[tokio::test]
async fn given_active_query_when_adding_posts_then_only_matching_posts_are_visible() {
    // GIVEN: Empty state filtered on "rust"
    let state = BlogState::new();
    state
        .apply(StateCommand::SetQuery("rust".to_string()))
        .await
        .unwrap();

    // WHEN: Adding a matching and a non-matching post
    state
        .apply(StateCommand::AddPost(Post::new("Rust", "is fun")))
        .await
        .unwrap();
    let snapshot = state
        .apply(StateCommand::AddPost(Post::new("Go", "is fine")))
        .await
        .unwrap();

    // THEN: Store has both, view shows one
    assert_eq!(snapshot.total, 2);
    assert_eq!(snapshot.posts, vec![Post::new("Rust", "is fun")]);
}

/// **VALUE**: Verifies clear is idempotent through the actor.
///
/// **WHY THIS MATTERS**: Pressing "Clear posts" twice must not error.
///
/// **BUG THIS CATCHES**: Would catch the actor treating an empty clear as a failure.
#[tokio::test]
async fn given_posts_when_clearing_twice_then_stays_empty() {
    // GIVEN: A populated state
    let state = BlogState::with_posts(vec![Post::new("a", "b"), Post::new("c", "d")]);

    // WHEN: Clearing twice
    let first = state.apply(StateCommand::ClearPosts).await.unwrap();
    let second = state.apply(StateCommand::ClearPosts).await.unwrap();

    // THEN: Both empty
    assert_eq!(first.total, 0);
    assert_eq!(second.total, 0);
    assert!(second.posts.is_empty());
    assert_eq!(second.revision, 2);
}

/// **VALUE**: Verifies concurrent reads and writes complete without deadlock.
///
/// **WHY THIS MATTERS**: Display code reads while command handlers write.
///
/// **BUG THIS CATCHES**: Would catch lock ordering problems between store and query locks.
#[tokio::test]
async fn given_concurrent_reads_and_writes_when_executed_then_no_deadlock() {
    // GIVEN: Shared state
    let state = BlogState::new();

    let state1 = state.clone();
    let state2 = state.clone();
    let state3 = state.clone();
    let state4 = state.clone();

    // WHEN: Spawning concurrent readers and writers
    let writer1 = tokio::spawn(async move {
        state1
            .apply(StateCommand::AddPost(Post::new("Concurrent", "write")))
            .await
    });
    let reader1 = tokio::spawn(async move { state2.posts().await });
    let reader2 = tokio::spawn(async move { state3.query().await });
    let writer2 = tokio::spawn(async move {
        state4
            .apply(StateCommand::SetQuery("write".to_string()))
            .await
    });

    // THEN: All operations complete within the timeout
    let timeout = tokio::time::Duration::from_secs(2);
    let result = tokio::time::timeout(timeout, async {
        let (w1, r1, r2, w2) = tokio::join!(writer1, reader1, reader2, writer2);
        (
            w1.map(|r| r.is_ok()).unwrap_or(false),
            r1.is_ok(),
            r2.is_ok(),
            w2.map(|r| r.is_ok()).unwrap_or(false),
        )
    })
    .await;

    assert!(
        result.is_ok(),
        "Operations should complete within 2 seconds (no deadlock)"
    );
    assert_eq!(result.unwrap(), (true, true, true, true));

    // AND: Both commands were applied
    let snapshot = state.visible_posts();
    assert_eq!(snapshot.revision, 2);
    assert_eq!(snapshot.total, 1);
}
