use crate::error::AtomicBlogError;

use blog_core::state::{BlogState, StateCommand, VisiblePosts};

use models::PostBuilder;

use log::{debug, error, info};

/// Handle the add-post form submission.
///
/// Submissions with an empty title or body are silently discarded.
///
/// # Returns
///
/// * `Ok(Some(VisiblePosts))` - Post added, with the recomputed view
/// * `Ok(None)` - Submission discarded
/// * `Err(AtomicBlogError)` - State actor failure
pub async fn submit_post(
    state: &BlogState,
    title: &str,
    body: &str,
) -> Result<Option<VisiblePosts>, AtomicBlogError> {
    let post = match PostBuilder::default()
        .with_title(title)
        .with_body(body)
        .build()
    {
        Ok(post) => post,
        Err(e) => {
            debug!("Discarding post submission: {}", e);
            return Ok(None);
        }
    };

    let snapshot = state
        .apply(StateCommand::AddPost(post))
        .await
        .map_err(|e| {
            error!("Failed to add post: {}", e);
            AtomicBlogError::from(e)
        })?;

    info!("Post added, {} posts in store", snapshot.total);
    Ok(Some(snapshot))
}

/// Handle the "Clear posts" button.
pub async fn clear_posts(state: &BlogState) -> Result<VisiblePosts, AtomicBlogError> {
    debug!("Clearing posts");

    state.apply(StateCommand::ClearPosts).await.map_err(|e| {
        error!("Failed to clear posts: {}", e);
        AtomicBlogError::from(e)
    })
}

/// Handle a change of the search box.
pub async fn set_query(
    state: &BlogState,
    query: impl Into<String>,
) -> Result<VisiblePosts, AtomicBlogError> {
    let query = query.into();
    debug!("Setting search query to {:?}", query);

    state
        .apply(StateCommand::SetQuery(query))
        .await
        .map_err(|e| {
            error!("Failed to update search query: {}", e);
            AtomicBlogError::from(e)
        })
}
