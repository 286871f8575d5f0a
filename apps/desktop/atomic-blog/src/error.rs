use blog_core::error::{ArchiveError, ConfigError, CoreError, StateError};

use common::ErrorLocation;

use std::io::Error as IoError;
use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while handling UI events.
///
/// Every variant keeps a short `message` for the console plus the location where
/// the error was raised for the log file.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum AtomicBlogError {
    /// Error from this App
    #[error("App Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Error from blog-core operations (state actor, archive, config)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// A console line that does not map to any UI event
    #[error("Invalid Input Error: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },
}

impl AtomicBlogError {
    #[track_caller]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AtomicBlogError::InvalidInput {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for showing on the console, without the source location.
    pub fn message(&self) -> &str {
        match self {
            AtomicBlogError::App { message, .. }
            | AtomicBlogError::Core { message, .. }
            | AtomicBlogError::InvalidInput { message, .. } => message,
        }
    }
}

impl From<CoreError> for AtomicBlogError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        AtomicBlogError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StateError> for AtomicBlogError {
    #[track_caller]
    fn from(error: StateError) -> Self {
        AtomicBlogError::from(CoreError::from(error))
    }
}

impl From<ArchiveError> for AtomicBlogError {
    #[track_caller]
    fn from(error: ArchiveError) -> Self {
        AtomicBlogError::from(CoreError::from(error))
    }
}

impl From<ConfigError> for AtomicBlogError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        AtomicBlogError::from(CoreError::from(error))
    }
}

impl From<IoError> for AtomicBlogError {
    #[track_caller]
    fn from(error: IoError) -> Self {
        AtomicBlogError::App {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
