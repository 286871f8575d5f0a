use blog_core::state::{BlogState, StateCommand};

use models::Post;

use tokio::time::{Duration, timeout};

/// **VALUE**: Verifies subscribers are notified after a fire-and-forget update.
///
/// **WHY THIS MATTERS**: Display code re-renders from the subscription rather than
/// re-deriving posts itself.
///
/// **BUG THIS CATCHES**: Would catch the actor updating the store without publishing.
#[tokio::test]
async fn given_subscriber_when_update_sent_then_receives_new_snapshot() {
    // GIVEN: A state and a subscriber
    let state = BlogState::new();
    let mut rx = state.subscribe();

    // WHEN: Sending an update without waiting
    state
        .update(StateCommand::AddPost(Post::new("Hello", "World")))
        .await
        .unwrap();

    // THEN: The subscriber sees the change
    timeout(Duration::from_secs(2), rx.changed())
        .await
        .expect("Subscriber should be notified in time")
        .unwrap();
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.posts, vec![Post::new("Hello", "World")]);
}

/// **VALUE**: Verifies a read-only view tracks the published snapshots.
///
/// **WHY THIS MATTERS**: Display components only get a BlogView, never the state itself.
///
/// **BUG THIS CATCHES**: Would catch a view holding a stale copy instead of a receiver.
#[tokio::test]
async fn given_view_when_state_changes_then_view_reflects_latest_snapshot() {
    // GIVEN: A seeded state and its view
    let state = BlogState::with_posts(vec![
        Post::new("Fast chip", "runs great"),
        Post::new("Slow bus", "lags"),
    ]);
    let view = state.view();
    assert_eq!(view.count(), 2, "View starts with the seeded posts");

    // WHEN: Filtering on "slow"
    state
        .apply(StateCommand::SetQuery("slow".to_string()))
        .await
        .unwrap();

    // THEN: View shows the filtered snapshot
    assert_eq!(view.count(), 1);
    assert_eq!(view.query(), "slow");
    assert_eq!(view.visible_posts().posts, vec![Post::new("Slow bus", "lags")]);
}

/// **VALUE**: Verifies snapshots are published in command order with increasing revisions.
///
/// **WHY THIS MATTERS**: A subscriber that lags must still end on the latest state.
///
/// **BUG THIS CATCHES**: Would catch revisions not advancing or out-of-order application.
#[tokio::test]
async fn given_many_updates_when_subscriber_catches_up_then_sees_latest_revision() {
    // GIVEN: A state and subscriber
    let state = BlogState::new();
    let rx = state.subscribe();

    // WHEN: Sending several updates, waiting only on the last
    for i in 0..5 {
        state
            .update(StateCommand::AddPost(Post::new(format!("t{i}"), "b")))
            .await
            .unwrap();
    }
    let last = state.apply(StateCommand::ClearPosts).await.unwrap();

    // THEN: Latest snapshot is the clear, after six commands
    assert_eq!(last.revision, 6);
    assert_eq!(rx.borrow().revision, 6);
    assert!(rx.borrow().posts.is_empty());
}
