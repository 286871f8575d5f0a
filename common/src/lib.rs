//! Shared building blocks for the Atomic Blog crates.
//!
//! ## Architecture
//!
//! - **common** (this crate): Error location tracking used by every error type
//! - **models**: Pure data structures (`Post`)
//! - **blog-core**: Store, search filter, archive and state actor operating on models
//! - **atomic-blog**: Application wiring everything together
//!
//! Every error variant in the workspace carries an [`ErrorLocation`] so log lines
//! point at the call site that produced the failure.

pub mod error;

pub use error::error_location::ErrorLocation;

#[cfg(test)]
mod tests;
