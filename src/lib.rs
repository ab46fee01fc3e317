//! Apodwall: Astronomy Picture of the Day downloader and wallpaper candidate filter.
//!
//! Two independent pipelines:
//! - **download**: API body → field reassembly ([`parse`]) → [`ImageRecord`] → image + metadata on
//!   disk under `<base>/apod/<YYYY-MM>/` ([`download::download_apod`]).
//! - **filter**: image files under a root → declared dimensions → [`wallpaper::is_candidate`] →
//!   candidate list / copies ([`filter::filter_wallpapers`]).

pub mod download;
pub mod engine;
pub mod fetch;
pub mod filter;
pub mod parse;
pub mod types;
pub mod utils;
pub mod wallpaper;

/// Re-export types for API
pub use types::*;

pub use download::{DownloadOutcome, download_apod, fetch_record, parse_body};
pub use filter::filter_wallpapers;
pub use parse::{FieldRecord, ParseError};

/// Result alias used by public apodwall API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;
