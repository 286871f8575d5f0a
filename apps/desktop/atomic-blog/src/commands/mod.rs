//! UI event handlers.
//!
//! These are the only functions that send mutation commands to the blog state.
//! Display code gets a read-only view and calls into these handlers.

pub mod archive;
pub mod posts;
