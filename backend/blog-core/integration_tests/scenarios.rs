use blog_core::archive::Archive;
use blog_core::generate::{create_random_posts, rng_from_seed};
use blog_core::state::{BlogState, StateCommand};

use models::Post;

/// **VALUE**: Walks through a full session: seed, search, add, copy from archive, clear.
///
/// **WHY THIS MATTERS**: This is how the pieces are wired in the application.
///
/// **BUG THIS CATCHES**: Would catch an archive copy bypassing the store's prepend or the
/// view missing a recompute somewhere along the way.
#[tokio::test]
async fn given_seeded_blog_when_running_session_then_each_step_updates_view() {
    // GIVEN: 30 generated posts and a 100 post archive
    let mut rng = rng_from_seed(Some(2024));
    let state = BlogState::with_posts(create_random_posts(30, &mut rng));
    let archive = Archive::generate(100, false, &mut rng);
    assert_eq!(state.visible_posts().count(), 30);

    // WHEN: Searching for something no generated post contains
    let snapshot = state
        .apply(StateCommand::SetQuery("zebra".to_string()))
        .await
        .unwrap();

    // THEN: Nothing visible
    assert_eq!(snapshot.count(), 0);
    assert_eq!(snapshot.total, 30);

    // WHEN: Adding a post that matches
    let snapshot = state
        .apply(StateCommand::AddPost(Post::new("Zebra", "stripes")))
        .await
        .unwrap();

    // THEN: It is the only visible post
    assert_eq!(snapshot.posts, vec![Post::new("Zebra", "stripes")]);

    // WHEN: Clearing the query and copying archive post 5
    state
        .apply(StateCommand::SetQuery(String::new()))
        .await
        .unwrap();
    let copied = archive.copy_post(5).unwrap();
    let snapshot = state
        .apply(StateCommand::AddPost(copied.clone()))
        .await
        .unwrap();

    // THEN: Copied post is first, archive unchanged
    assert_eq!(snapshot.posts[0], copied);
    assert_eq!(snapshot.total, 32);
    assert_eq!(archive.len(), 100);

    // WHEN: Clearing
    let snapshot = state.apply(StateCommand::ClearPosts).await.unwrap();

    // THEN: Empty
    assert_eq!(snapshot.total, 0);
}
