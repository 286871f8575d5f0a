use crate::error::model_error::ModelError;
use crate::{ErrorLocation, Post};

use std::panic::Location;

/// Builder for creating validated Post instances.
///
/// This is the gate the add form uses: both fields must be present and non-empty.
#[derive(Debug, Default)]
pub struct PostBuilder {
    title: Option<String>,
    body: Option<String>,
}

impl PostBuilder {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Build the Post with validation.
    #[track_caller]
    pub fn build(self) -> Result<Post, ModelError> {
        let title = self.title.ok_or_else(|| ModelError::Validation {
            message: String::from("Title is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if title.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Title cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = self.body.ok_or_else(|| ModelError::Validation {
            message: String::from("Body is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if body.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Body cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Post { title, body })
    }
}
