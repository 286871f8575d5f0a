//! Archive panel: a large, unfiltered pool of generated posts.
//!
//! The archive is generated once and never mutated. Its only outward effect is
//! copying one of its posts into the main store.

use crate::error::ArchiveError;
use crate::generate::create_random_posts;

use models::Post;

use log::{debug, info};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Archive {
    posts: Vec<Post>,
    visible: bool,
}

impl Archive {
    /// Generate `size` posts. Hidden unless `show_on_start` is set.
    pub fn generate<R: Rng + ?Sized>(size: usize, show_on_start: bool, rng: &mut R) -> Self {
        let posts = create_random_posts(size, rng);
        info!("Archive generated with {} posts", posts.len());
        Self::with_posts(posts, show_on_start)
    }

    pub fn with_posts(posts: Vec<Post>, visible: bool) -> Self {
        Self { posts, visible }
    }

    /// Flip the show/hide toggle and return the new state.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        debug!("Archive visibility set to {}", self.visible);
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    /// Clone the post at `index` for insertion into the main store.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::IndexOutOfRange`] if `index` is past the end.
    #[track_caller]
    pub fn copy_post(&self, index: usize) -> Result<Post, ArchiveError> {
        self.posts
            .get(index)
            .cloned()
            .ok_or_else(|| ArchiveError::index_out_of_range(index, self.posts.len()))
    }

    /// Zero-based `page` of at most `page_size` posts. Empty when out of range.
    pub fn page(&self, page: usize, page_size: usize) -> &[Post] {
        let start = page.saturating_mul(page_size).min(self.posts.len());
        let end = start.saturating_add(page_size).min(self.posts.len());
        &self.posts[start..end]
    }

    /// Number of pages of `page_size` posts.
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.posts.len().div_ceil(page_size)
    }
}
