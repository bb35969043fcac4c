// Error module
// Failure kinds reported by the image controller

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by controller operations.
///
/// All of them are recoverable: the controller state is left as it was
/// before the failing call.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Reading or decoding an image failed
    #[error("failed to import image from {}", path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Encoding or writing the output file failed
    #[error("failed to write image to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An operation needed an image but none is loaded
    #[error("no image loaded")]
    NoImageLoaded,
}

impl ControllerError {
    /// Message shown to the user when this error reaches the UI
    pub fn user_message(&self) -> &'static str {
        match self {
            ControllerError::Import { .. } => "Error importing image!",
            ControllerError::Write { .. } => "Error saving image!",
            ControllerError::NoImageLoaded => "No image to save!",
        }
    }
}
