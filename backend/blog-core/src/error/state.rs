use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StateError {
    /// The actor task is gone or never started.
    #[error("Actor Error: {message} {location}")]
    Actor {
        message: String,
        location: ErrorLocation,
    },

    /// The actor dropped the acknowledgement channel before replying.
    #[error("Acknowledge Error: {message} {location}")]
    Acknowledge {
        message: String,
        location: ErrorLocation,
    },
}
