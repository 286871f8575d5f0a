pub mod builder;

use serde::{Deserialize, Serialize};

/// A title/body text record, the only entity of the blog.
///
/// Posts carry no identifier; their position in the store is the only reference.
/// Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub body: String,
}

impl Post {
    /// Construct a post without validation.
    ///
    /// Used for generated posts, which are well-formed by construction. User input
    /// goes through [`PostBuilder`](builder::PostBuilder) instead.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The text the search filter matches against: title and body joined by one space.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}
