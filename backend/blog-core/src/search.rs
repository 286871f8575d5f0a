//! Search filter deriving the visible posts from the store.

use models::Post;

/// Whether `post` is visible for a non-empty `query`.
///
/// Case-insensitive substring match against `"{title} {body}"`.
pub fn matches(post: &Post, query: &str) -> bool {
    post.searchable_text()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Posts visible for `query`, in store order.
///
/// An empty query shows the whole list. Any other query, whitespace included, is
/// matched literally.
pub fn filter_posts(posts: &[Post], query: &str) -> Vec<Post> {
    if query.is_empty() {
        return posts.to_vec();
    }

    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| post.searchable_text().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
