use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering or persisting shape fixtures
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Unknown shape kind '{name}'. Supported shapes: circle, square, triangle, diamond")]
    InvalidShapeKind { name: String },

    #[error("Invalid render dimensions: canvas size {canvas_size}px, stroke width {stroke_width}px (both must be positive)")]
    InvalidDimensions { canvas_size: u32, stroke_width: u32 },

    #[error("Unknown naming strategy '{name}'. Supported: flat-suffix, flat-inverse, split")]
    InvalidNamingStrategy { name: String },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    DirectoryCreationFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode PNG for {}: {source}", .path.display())]
    ImageEncodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {}: {source}", .path.display())]
    ImageWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FixtureError {
    pub fn invalid_shape<S: Into<String>>(name: S) -> Self {
        Self::InvalidShapeKind { name: name.into() }
    }

    pub fn invalid_naming<S: Into<String>>(name: S) -> Self {
        Self::InvalidNamingStrategy { name: name.into() }
    }

    /// Errors caused by bad input rather than by the filesystem
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            FixtureError::InvalidShapeKind { .. }
                | FixtureError::InvalidDimensions { .. }
                | FixtureError::InvalidNamingStrategy { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            FixtureError::InvalidShapeKind { .. } => "FIXTURE_INVALID_SHAPE",
            FixtureError::InvalidDimensions { .. } => "FIXTURE_INVALID_DIMENSIONS",
            FixtureError::InvalidNamingStrategy { .. } => "FIXTURE_INVALID_NAMING",
            FixtureError::DirectoryCreationFailure { .. } => "FIXTURE_DIRECTORY_CREATION_FAILED",
            FixtureError::ImageEncodeFailure { .. } => "FIXTURE_ENCODE_FAILED",
            FixtureError::ImageWriteFailure { .. } => "FIXTURE_WRITE_FAILED",
            FixtureError::Other(_) => "FIXTURE_UNKNOWN_ERROR",
        }
    }
}
