use std::path::PathBuf;

use thiserror::Error;

/// Errors from the size classifier. Per image, never batch-fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("cannot compute aspect ratio of {width}x{height}: height is zero")]
    ZeroHeight { width: u32, height: u32 },

    #[error("invalid size '{input}', expected WIDTHxHEIGHT with positive integers")]
    InvalidSize { input: String },

    #[error("invalid ratio bound '{bound}', expected a finite number >= 0")]
    InvalidRatioBound { bound: String },
}

/// Errors reading an image's declared dimensions.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Invalid image at path '{path}': {reason}")]
    InvalidImage { path: PathBuf, reason: String },
}
