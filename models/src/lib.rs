//! Domain models for the Atomic Blog.
//!
//! Pure data structures with no business logic. The store, the search filter and
//! the archive in `blog-core` all operate on [`Post`].

pub mod error;
pub mod post;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use post::Post;
pub use post::builder::PostBuilder;

#[cfg(test)]
mod tests;
