pub mod archive;
pub mod config;
pub mod error;
pub mod generate;
pub mod search;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub const APP_NAME: &str = "atomic-blog";
pub const LOG_FILE_NAME: &str = const_format::concatcp!(APP_NAME, ".log");

/// Number of posts the main list starts with.
pub const DEFAULT_INITIAL_POST_COUNT: usize = 30;

/// Number of posts generated for the archive panel.
pub const DEFAULT_ARCHIVE_SIZE: usize = 10_000;
