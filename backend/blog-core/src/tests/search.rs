use crate::search::{filter_posts, matches};

use models::Post;

fn sample_posts() -> Vec<Post> {
    vec![
        Post::new("Fast chip", "runs great"),
        Post::new("Slow bus", "lags"),
        Post::new("Quantum bus", "FAST transfer"),
    ]
}

/// **VALUE**: Verifies the empty query returns the list unchanged.
///
/// **WHY THIS MATTERS**: With an empty search box every post must be shown.
///
/// **BUG THIS CATCHES**: Would catch if the empty query is matched as a substring and then
/// something (like trimming) drops posts.
#[test]
fn given_empty_query_when_filtering_then_returns_all_posts_in_order() {
    // GIVEN: Posts
    let posts = sample_posts();

    // WHEN: Filtering with empty query
    let visible = filter_posts(&posts, "");

    // THEN: Identity
    assert_eq!(visible, posts);
}

/// **VALUE**: Verifies the documented "fast" scenario.
///
/// **WHY THIS MATTERS**: The search box must be case-insensitive.
///
/// **BUG THIS CATCHES**: Would catch a case-sensitive comparison.
#[test]
fn given_fast_query_when_filtering_then_returns_only_fast_chip() {
    // GIVEN: Two posts, only one mentions "fast"
    let posts = vec![
        Post::new("Fast chip", "runs great"),
        Post::new("Slow bus", "lags"),
    ];

    // WHEN: Filtering for "fast"
    let visible = filter_posts(&posts, "fast");

    // THEN: Only the fast chip
    assert_eq!(visible, vec![Post::new("Fast chip", "runs great")]);
}

/// **VALUE**: Verifies matches in either title or body are found and order is preserved.
///
/// **WHY THIS MATTERS**: The filter searches the whole post and must not reorder results.
///
/// **BUG THIS CATCHES**: Would catch title-only matching or sorting of results.
#[test]
fn given_query_in_title_or_body_when_filtering_then_keeps_store_order() {
    // GIVEN: Posts where "fast" appears in a title and in an upper-case body
    let posts = sample_posts();

    // WHEN: Filtering with mixed-case query
    let visible = filter_posts(&posts, "FaSt");

    // THEN: Both matches in store order
    assert_eq!(
        visible,
        vec![
            Post::new("Fast chip", "runs great"),
            Post::new("Quantum bus", "FAST transfer"),
        ]
    );
}

/// **VALUE**: Pins the title/body separator to a single space.
///
/// **WHY THIS MATTERS**: Queries spanning the boundary match only if they include the space.
///
/// **BUG THIS CATCHES**: Would catch if title and body are concatenated without a separator
/// (then "erlo" would match) or with a different one.
#[test]
fn given_query_spanning_title_and_body_when_filtering_then_requires_space() {
    // GIVEN: Title "Hyper", body "Loop"
    let posts = vec![Post::new("Hyper", "Loop")];

    // THEN: The query with the space matches, the one without does not
    assert_eq!(filter_posts(&posts, "er lo").len(), 1);
    assert!(filter_posts(&posts, "erlo").is_empty());
}

/// **VALUE**: Verifies a whitespace-only query is applied literally.
///
/// **WHY THIS MATTERS**: Only the empty query disables filtering; " " still filters.
///
/// **BUG THIS CATCHES**: Would catch if the query is trimmed before the empty check.
#[test]
fn given_space_query_when_filtering_then_every_post_matches_through_separator() {
    // GIVEN: Posts with single-word titles and bodies
    let posts = vec![Post::new("a", "b"), Post::new("c", "d")];

    // WHEN: Filtering with a single space
    let visible = filter_posts(&posts, " ");

    // THEN: All match via the separator
    assert_eq!(visible, posts);

    // AND: A double space matches nothing
    assert!(filter_posts(&posts, "  ").is_empty());
}

/// **VALUE**: Verifies the filter result is exactly the subset accepted by `matches`.
///
/// **WHY THIS MATTERS**: `matches` is used for highlighting; it must agree with the filter.
///
/// **BUG THIS CATCHES**: Would catch the two code paths drifting apart.
#[test]
fn given_various_queries_when_filtering_then_agrees_with_matches() {
    // GIVEN: Posts and a set of queries
    let posts = sample_posts();

    for query in ["bus", "LAGS", "t", "zzz", "p r", "chip runs"] {
        // WHEN: Filtering
        let visible = filter_posts(&posts, query);

        // THEN: Exactly the posts that `matches` accepts, in order
        let expected: Vec<Post> = posts
            .iter()
            .filter(|post| matches(post, query))
            .cloned()
            .collect();
        assert_eq!(visible, expected, "Mismatch for query {query:?}");
    }
}

/// **VALUE**: Verifies filtering an empty list is fine for any query.
///
/// **WHY THIS MATTERS**: After "Clear posts" the search box keeps working.
///
/// **BUG THIS CATCHES**: Would catch index-based code that assumes a non-empty list.
#[test]
fn given_no_posts_when_filtering_then_returns_empty() {
    assert!(filter_posts(&[], "anything").is_empty());
    assert!(filter_posts(&[], "").is_empty());
}
