//! Image URL / filename extraction and [`ImageRecord`] construction for both API variants.

use regex::Regex;
use serde_json::Value;

use super::error::ParseError;
use super::record::FieldRecord;
use super::scanner::{ScanOptions, scan_fields};
use super::segments::{Markers, reassemble_fields};
use crate::types::{FieldParser, ImageRecord, RecordInfo};

/// Host every APOD image URL starts with.
pub const DEFAULT_HOST_PREFIX: &str = "https://apod.nasa.gov";

/// Strip the JSON punctuation and newlines from a raw API body so it reads as `key:value,...`.
pub fn clean_page_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '{' | '}' | '"' | '\n'))
        .collect()
}

/// Pattern-based URL and filename extraction over raw page text.
#[derive(Clone, Debug)]
pub struct RecordExtractor {
    url_re: Regex,
    filename_re: Regex,
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_PREFIX).expect("default extractor patterns compile")
    }
}

impl RecordExtractor {
    /// `host_prefix` is matched literally.
    pub fn new(host_prefix: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            url_re: Regex::new(&format!(r"{}.*?\.[a-z]{{3}}", regex::escape(host_prefix)))?,
            filename_re: Regex::new(r"[A-Za-z0-9_-]+\.[a-z]{3}$")?,
        })
    }

    /// First URL under the host prefix ending in a dot and a three-letter lowercase extension.
    pub fn extract_url<'a>(&self, text: &'a str) -> Result<&'a str, ParseError> {
        self.url_re
            .find(text)
            .map(|m| m.as_str())
            .ok_or(ParseError::UrlNotFound)
    }

    /// Trailing `stem.ext` of `url`.
    pub fn extract_filename<'a>(&self, url: &'a str) -> Result<&'a str, ParseError> {
        self.filename_re
            .find(url)
            .map(|m| m.as_str())
            .ok_or_else(|| ParseError::FilenameNotFound {
                url: url.to_string(),
            })
    }
}

/// Split `stem.ext` on its last dot. Both halves must be non-empty.
pub fn split_filename(filename: &str) -> Option<(&str, &str)> {
    filename
        .rsplit_once('.')
        .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
}

/// Reassemble cleaned page text into a [`FieldRecord`] with the selected strategy.
pub fn parse_fields(text: &str, parser: FieldParser) -> Result<FieldRecord, ParseError> {
    match parser {
        FieldParser::Scanner => Ok(scan_fields(text, &ScanOptions::default())),
        FieldParser::Markers => {
            let entries = reassemble_fields(text, &Markers::default())?;
            FieldRecord::from_entries(entries)
        }
    }
}

impl ImageRecord {
    /// Text variant: URL and filename come from pattern matching over `text`; the info is the
    /// reassembled field record.
    pub fn from_page_text(
        text: &str,
        extractor: &RecordExtractor,
        parser: FieldParser,
    ) -> Result<Self, ParseError> {
        let url = extractor.extract_url(text)?;
        let filename = extractor.extract_filename(url)?;
        let (title, extension) =
            split_filename(filename).ok_or_else(|| ParseError::FilenameNotFound {
                url: url.to_string(),
            })?;
        let info = parse_fields(text, parser)?;
        Ok(Self {
            url: url.to_string(),
            title: title.to_string(),
            extension: extension.to_string(),
            info: RecordInfo::Fields(info),
        })
    }

    /// JSON variant: prefers `hdurl`, falls back to `url`. The object is kept as the info.
    pub fn from_json(value: Value) -> Result<Self, ParseError> {
        if let Some(media_type) = value.get("media_type").and_then(Value::as_str)
            && media_type != "image"
        {
            return Err(ParseError::UnsupportedMedia {
                media_type: media_type.to_string(),
            });
        }
        let url = ["hdurl", "url"]
            .iter()
            .find_map(|k| value.get(*k).and_then(Value::as_str).filter(|u| !u.is_empty()))
            .ok_or(ParseError::UrlNotFound)?
            .to_string();

        let path = url.split(['?', '#']).next().unwrap_or_default();
        let basename = path.rsplit('/').next().unwrap_or_default();
        let (title, extension) =
            split_filename(basename).ok_or_else(|| ParseError::FilenameNotFound {
                url: url.clone(),
            })?;
        let (title, extension) = (title.to_string(), extension.to_string());

        Ok(Self {
            url,
            title,
            extension,
            info: RecordInfo::Json(value),
        })
    }
}
