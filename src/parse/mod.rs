//! Page text parsing: field reassembly, token scanning, URL/filename extraction.

pub mod error;
pub mod extract;
pub mod record;
pub mod scanner;
pub mod segments;

pub use error::ParseError;
pub use extract::{
    DEFAULT_HOST_PREFIX, RecordExtractor, clean_page_text, parse_fields, split_filename,
};
pub use record::{Field, FieldRecord};
pub use scanner::{FieldToken, ScanOptions, Tokens, header_of, scan_fields, tokenize};
pub use segments::{Markers, find_first_index, is_field_header, reassemble_fields, split_segments};
