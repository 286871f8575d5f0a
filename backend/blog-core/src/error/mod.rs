pub mod archive;
pub mod config;
pub mod state;

pub use archive::ArchiveError;
pub use config::ConfigError;
pub use state::StateError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Archive(#[from] archive::ArchiveError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    State(#[from] state::StateError),
}
