use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ArchiveError {
    #[error("Archive Index Error: index {index} out of range (archive holds {len} posts) {location}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        location: ErrorLocation,
    },
}

impl ArchiveError {
    #[track_caller]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        ArchiveError::IndexOutOfRange {
            index,
            len,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
