use crate::search::filter_posts;

use models::Post;

use serde::Serialize;

/// Derived view of the store for the current query.
///
/// Published to subscribers after every applied [`StateCommand`](super::StateCommand).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisiblePosts {
    /// Posts matching `query`, in store order.
    pub posts: Vec<Post>,

    /// Number of posts in the store, filtered or not.
    pub total: usize,

    /// Query the view was derived for.
    pub query: String,

    /// Number of commands applied before this snapshot was taken.
    pub revision: u64,
}

impl VisiblePosts {
    pub fn derive(all: &[Post], query: &str, revision: u64) -> Self {
        Self {
            posts: filter_posts(all, query),
            total: all.len(),
            query: query.to_string(),
            revision,
        }
    }

    pub fn count(&self) -> usize {
        self.posts.len()
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty()
    }
}
