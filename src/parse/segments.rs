//! Marker-based field reassembly over naively split page text.
//!
//! Splitting the page text on the delimiter breaks the explanation field apart wherever its prose
//! contains a comma. The pieces between the start marker and the end marker are glued back
//! together (without a separator) and orphan fragments are dropped.

use super::error::ParseError;

/// Start/end markers bracketing the multi-segment field, plus the delimiter used to split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    pub delimiter: char,
    /// Marker contained in the first segment of the multi-segment field.
    pub start: String,
    /// Marker of the field that always comes right after the multi-segment field.
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            delimiter: ',',
            start: "explanation:".to_string(),
            end: "hdurl:".to_string(),
        }
    }
}

/// Split `text` on `delimiter` into ordered segments. Empty segments are kept.
pub fn split_segments(text: &str, delimiter: char) -> Vec<&str> {
    text.split(delimiter).collect()
}

/// Index of the first item satisfying `pred`, stopping at the first hit.
pub fn find_first_index<T, P>(items: &[T], pred: P) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    for (i, item) in items.iter().enumerate() {
        if pred(item) {
            return Some(i);
        }
    }
    None
}

/// Whether a segment is a `key:content` header: its first whitespace-delimited token holds a `:`.
/// Empty and whitespace-only segments have no first token and are malformed.
pub fn is_field_header(index: usize, segment: &str) -> Result<bool, ParseError> {
    match segment.split_whitespace().next() {
        Some(token) => Ok(token.contains(':')),
        None => Err(ParseError::MalformedSegment {
            index,
            segment: segment.to_string(),
        }),
    }
}

/// Reassemble the delimited page text into ordered `key:content` entries.
///
/// The multi-segment field runs from the first segment containing `markers.start` through the
/// segment right before the first segment containing `markers.end`; its pieces are concatenated
/// as-is, with no separator reinserted. Every other segment is kept only if it is a field header.
pub fn reassemble_fields(text: &str, markers: &Markers) -> Result<Vec<String>, ParseError> {
    let segments = split_segments(text, markers.delimiter);

    let start = find_first_index(&segments, |s| s.contains(markers.start.as_str())).ok_or_else(
        || ParseError::BoundaryNotFound {
            marker: markers.start.clone(),
        },
    )?;
    let end = find_first_index(&segments, |s| s.contains(markers.end.as_str()))
        .filter(|&end| end > start)
        .ok_or_else(|| ParseError::BoundaryNotFound {
            marker: markers.end.clone(),
        })?;

    let reassembled: String = segments[start..end].concat();

    let mut kept = Vec::with_capacity(segments.len());
    let mut slot = None;
    for (i, segment) in segments.iter().enumerate() {
        let header = is_field_header(i, segment)?;
        if i == start {
            slot = Some((kept.len(), header));
        }
        if header {
            kept.push(segment.to_string());
        }
    }

    match slot {
        Some((pos, true)) => kept[pos] = reassembled,
        Some((pos, false)) => kept.insert(pos, reassembled),
        None => unreachable!("start index is within segments"),
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_first_index_stops_at_first_match() {
        let items = ["a", "bb", "cc"];
        assert_eq!(find_first_index(&items, |s| s.len() == 2), Some(1));
        assert_eq!(find_first_index(&items, |s| s.is_empty()), None);
    }

    #[test]
    fn header_detection_uses_first_token() {
        assert!(is_field_header(0, "title:Some Nebula").unwrap());
        assert!(is_field_header(0, "  date:2021-06-01").unwrap());
        assert!(!is_field_header(0, " and then: more").unwrap());
        assert!(is_field_header(3, "   ").is_err());
    }

    #[test]
    fn orphan_before_start_does_not_shift_slot() {
        let text = "a:1,stray piece,explanation:x,y,hdurl:h";
        let out = reassemble_fields(text, &Markers::default()).unwrap();
        assert_eq!(out, vec!["a:1", "explanation:xy", "hdurl:h"]);
    }
}
