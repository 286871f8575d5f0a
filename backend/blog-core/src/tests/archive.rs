use crate::archive::Archive;
use crate::error::ArchiveError;
use crate::generate::rng_from_seed;

use models::Post;

fn numbered_archive(count: usize) -> Archive {
    let posts = (0..count)
        .map(|i| Post::new(format!("title {i}"), format!("body {i}")))
        .collect();
    Archive::with_posts(posts, false)
}

/// **VALUE**: Verifies the archive generates the requested number of posts, hidden.
///
/// **WHY THIS MATTERS**: The archive panel advertises 10,000 posts and starts hidden.
///
/// **BUG THIS CATCHES**: Would catch off-by-one generation or a wrong initial toggle.
#[test]
fn given_size_when_generating_archive_then_has_that_many_hidden_posts() {
    // GIVEN: A seeded RNG
    let mut rng = rng_from_seed(Some(3));

    // WHEN: Generating a 10,000 post archive
    let archive = Archive::generate(10_000, false, &mut rng);

    // THEN: Size matches and panel is hidden
    assert_eq!(archive.len(), 10_000);
    assert!(!archive.is_visible());
}

/// **VALUE**: Verifies the show/hide toggle flips and reports the new state.
///
/// **WHY THIS MATTERS**: The button label depends on the returned value.
///
/// **BUG THIS CATCHES**: Would catch returning the old state.
#[test]
fn given_hidden_archive_when_toggling_then_alternates_visibility() {
    let mut archive = numbered_archive(3);

    assert!(archive.toggle_visibility());
    assert!(archive.is_visible());
    assert!(!archive.toggle_visibility());
    assert!(!archive.is_visible());
}

/// **VALUE**: Verifies copying a post returns a clone and leaves the archive intact.
///
/// **WHY THIS MATTERS**: "Add as new post" is a one-way copy; the archive never shrinks.
///
/// **BUG THIS CATCHES**: Would catch `remove` being used instead of `clone`.
#[test]
fn given_archive_when_copying_post_then_archive_is_unchanged() {
    // GIVEN: An archive of three posts
    let archive = numbered_archive(3);

    // WHEN: Copying the second post
    let copied = archive.copy_post(1).unwrap();

    // THEN: The copy matches and the archive still has three posts
    assert_eq!(copied, Post::new("title 1", "body 1"));
    assert_eq!(archive.len(), 3);
    assert_eq!(archive.get(1), Some(&copied));
}

/// **VALUE**: Verifies an out-of-range copy is rejected with the index and length.
///
/// **WHY THIS MATTERS**: Console users type the index by hand.
///
/// **BUG THIS CATCHES**: Would catch a panic on `posts[index]`.
#[test]
fn given_out_of_range_index_when_copying_then_returns_index_error() {
    // GIVEN: An archive of three posts
    let archive = numbered_archive(3);

    // WHEN: Copying index 3
    let result = archive.copy_post(3);

    // THEN: IndexOutOfRange with details
    match result.unwrap_err() {
        ArchiveError::IndexOutOfRange { index, len, .. } => {
            assert_eq!(index, 3);
            assert_eq!(len, 3);
        }
    }
}

/// **VALUE**: Verifies paging covers the archive without gaps or overlap.
///
/// **WHY THIS MATTERS**: The console lists 10,000 posts a page at a time.
///
/// **BUG THIS CATCHES**: Would catch off-by-one page boundaries and panics past the end.
#[test]
fn given_archive_when_paging_then_pages_cover_all_posts() {
    // GIVEN: 45 posts, 20 per page
    let archive = numbered_archive(45);

    // THEN: Three pages, the last one partial, and nothing after it
    assert_eq!(archive.page_count(20), 3);
    assert_eq!(archive.page(0, 20).len(), 20);
    assert_eq!(archive.page(1, 20)[0], Post::new("title 20", "body 20"));
    assert_eq!(archive.page(2, 20).len(), 5);
    assert!(archive.page(3, 20).is_empty());
    assert!(archive.page(usize::MAX, 20).is_empty());
    assert_eq!(archive.page_count(0), 0);
}
