//! Single-pass scanner turning delimited page text into `key:value` tokens.
//!
//! The delimiter is only a candidate separator: a split is committed when the next piece looks
//! like a new `key:` header. Anything else continues the current field, so prose containing the
//! delimiter stays in one value without knowing which field follows it.

use log::{debug, warn};

use super::record::FieldRecord;

/// One token of the scanned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldToken<'a> {
    /// Start of a new field: `key` and the text after its first `:`.
    Header { key: &'a str, value: &'a str },
    /// Text that belongs to the previous field.
    Continuation(&'a str),
}

#[derive(Clone, Debug)]
pub struct ScanOptions {
    pub delimiter: char,
    /// Put the delimiter back between a value and its continuation. Off by default: pieces are
    /// concatenated as they are.
    pub rejoin_with_delimiter: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            rejoin_with_delimiter: false,
        }
    }
}

fn is_key(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Lookahead: does `piece` open a new field? Returns `(key, value)` if so.
///
/// The first whitespace-delimited token must be `key:...` with an identifier key, and the text
/// right after the colon must not be `//` (a URL scheme inside prose is not a key).
pub fn header_of(piece: &str) -> Option<(&str, &str)> {
    let trimmed = piece.trim_start();
    let token_end = trimmed
        .find(char::is_whitespace)
        .unwrap_or(trimmed.len());
    let colon = trimmed[..token_end].find(':')?;
    let key = &trimmed[..colon];
    let value = &trimmed[colon + 1..];
    if !is_key(key) || value.starts_with("//") {
        return None;
    }
    Some((key, value))
}

/// Iterator over the tokens of `text`.
pub struct Tokens<'a> {
    pieces: std::str::Split<'a, char>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = FieldToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let piece = self.pieces.next()?;
        Some(match header_of(piece) {
            Some((key, value)) => FieldToken::Header { key, value },
            None => FieldToken::Continuation(piece),
        })
    }
}

pub fn tokenize(text: &str, delimiter: char) -> Tokens<'_> {
    Tokens {
        pieces: text.split(delimiter),
    }
}

/// Scan `text` into a [`FieldRecord`]. Continuations before the first header are dropped; a repeated
/// key keeps its first value and the repeat (with its continuations) is dropped.
pub fn scan_fields(text: &str, opts: &ScanOptions) -> FieldRecord {
    let mut record = FieldRecord::new();
    // false while inside a dropped (orphan or duplicate) field
    let mut open = false;
    for token in tokenize(text, opts.delimiter) {
        match token {
            FieldToken::Header { key, value } => {
                open = record.push(key, value);
                if !open {
                    warn!("Duplicate field '{}' dropped", key);
                }
            }
            FieldToken::Continuation(piece) => {
                let Some(value) = record.last_value_mut().filter(|_| open) else {
                    debug!("Orphan fragment dropped: {:?}", piece);
                    continue;
                };
                if opts.rejoin_with_delimiter {
                    value.push(opts.delimiter);
                }
                value.push_str(piece);
            }
        }
    }
    record
}
