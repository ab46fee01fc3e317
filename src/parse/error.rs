use thiserror::Error;

/// Errors raised while turning page text into a [`FieldRecord`](super::FieldRecord) or an
/// [`ImageRecord`](crate::ImageRecord). All of them are fatal for the current run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A boundary marker is absent, or the end marker only occurs at or before the start marker.
    #[error("boundary marker '{marker}' not found in page text")]
    BoundaryNotFound { marker: String },

    #[error("segment {index} is malformed: {segment:?}")]
    MalformedSegment { index: usize, segment: String },

    #[error("image URL not found in page text")]
    UrlNotFound,

    #[error("filename not parsed from URL '{url}'")]
    FilenameNotFound { url: String },

    #[error("required field '{key}' missing from record")]
    MissingField { key: String },

    #[error("unsupported media type '{media_type}' (only images can be downloaded)")]
    UnsupportedMedia { media_type: String },
}
