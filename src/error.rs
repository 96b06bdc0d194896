//! Error types for i2a.

use std::path::PathBuf;

use crate::ascii::RenderInitError;
use crate::config::ConfigError;

/// Errors that end a conversion. Every variant maps to exit status 1.
#[derive(Debug, thiserror::Error)]
pub enum I2aError {
    /// Malformed or missing command-line input
    #[error("{0}")]
    Argument(String),

    /// The image file couldn't be read or decoded
    #[error("couldn't load image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image decoded to zero width or height
    #[error("couldn't load image '{}': image is empty", .path.display())]
    EmptyImage { path: PathBuf },

    /// The glyph renderer refused the computed size
    #[error(transparent)]
    RenderInit(#[from] RenderInitError),

    /// Terminal size was requested but couldn't be queried
    #[error("couldn't query terminal size: {0}")]
    TerminalSize(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the output failed
    #[error("couldn't write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, I2aError>;
