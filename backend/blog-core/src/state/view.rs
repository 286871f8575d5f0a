use crate::state::VisiblePosts;

use tokio::sync::watch;

/// Read-only handle on the blog state for display code.
///
/// Holds a receiver on the snapshot channel only, so it cannot mutate anything.
/// Mutations go through the command handlers that own a [`BlogState`](super::BlogState).
#[derive(Debug, Clone)]
pub struct BlogView {
    visible_rx: watch::Receiver<VisiblePosts>,
}

impl BlogView {
    pub(crate) fn new(visible_rx: watch::Receiver<VisiblePosts>) -> Self {
        Self { visible_rx }
    }

    /// Latest published snapshot.
    pub fn visible_posts(&self) -> VisiblePosts {
        self.visible_rx.borrow().clone()
    }

    pub fn query(&self) -> String {
        self.visible_rx.borrow().query.clone()
    }

    /// Number of posts currently shown.
    pub fn count(&self) -> usize {
        self.visible_rx.borrow().count()
    }

    /// A fresh receiver that is notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<VisiblePosts> {
        self.visible_rx.clone()
    }
}
