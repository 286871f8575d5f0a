//! Canonical post list.
//!
//! The store is the only place post data is mutated, and it only knows two
//! mutations: prepend one post, or replace everything with nothing. It does not
//! validate; callers reject malformed posts before they get here.

use models::Post;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing ordered list (first element shown first).
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Prepend `post` so the newest post is shown first.
    pub fn add_post(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    /// Replace the list with an empty one. There is no undo.
    pub fn clear_posts(&mut self) {
        self.posts = Vec::new();
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
