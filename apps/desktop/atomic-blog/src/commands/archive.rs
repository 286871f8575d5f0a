use crate::error::AtomicBlogError;

use blog_core::archive::Archive;
use blog_core::error::ArchiveError;
use blog_core::state::{BlogState, StateCommand, VisiblePosts};

use log::{error, info, warn};

/// Handle the "Show/Hide archive posts" button. Returns the new visibility.
pub fn toggle_archive(archive: &mut Archive) -> bool {
    let visible = archive.toggle_visibility();
    info!(
        "Archive {}",
        if visible { "shown" } else { "hidden" }
    );
    visible
}

/// Handle "Add as new post" on archive item `index` (zero-based).
///
/// The archive keeps its copy; the store gets a clone prepended.
///
/// # Errors
///
/// * [`AtomicBlogError::InvalidInput`] - archive hidden or index out of range
/// * [`AtomicBlogError::Core`] - state actor failure
pub async fn add_archive_post(
    state: &BlogState,
    archive: &Archive,
    index: usize,
) -> Result<VisiblePosts, AtomicBlogError> {
    if !archive.is_visible() {
        warn!("Archive post {} requested while archive is hidden", index);
        return Err(AtomicBlogError::invalid_input(
            "Archive is hidden. Type `archive` to show it first.",
        ));
    }

    let post = archive.copy_post(index).map_err(|e| match e {
        ArchiveError::IndexOutOfRange { len, .. } => {
            warn!("{}", e);
            AtomicBlogError::invalid_input(format!(
                "No archive post #{} (archive holds {} posts)",
                index.saturating_add(1),
                len
            ))
        }
    })?;

    info!("Copying archive post {} \"{}\" into the blog", index, post.title);

    state
        .apply(StateCommand::AddPost(post))
        .await
        .map_err(|e| {
            error!("Failed to add archive post: {}", e);
            AtomicBlogError::from(e)
        })
}
