//! Error types for rendering operations

use thiserror::Error;

/// Rendering errors
///
/// Asset load failures are fatal to the single operation that needed the
/// asset; nothing is partially emitted.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Image decode or encode failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Underlying file IO failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Card or deck description could not be parsed
    #[error("Invalid card description: {0}")]
    Parse(#[from] serde_json::Error),

    /// Template image unusable for rendering
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
