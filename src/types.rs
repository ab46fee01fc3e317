//! Public and internal types for the apodwall API and CLI.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::parse::FieldRecord;
use crate::utils::config::{ApiConsts, PackagePaths, WallpaperConsts};
use crate::wallpaper::ClassifyError;

/// Pixel dimensions of an image, or the resolution of a display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size2D {
    pub width: u32,
    pub height: u32,
}

impl Size2D {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT` (e.g. `1920x1080`). Both components must be positive.
impl FromStr for Size2D {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClassifyError::InvalidSize {
            input: s.to_string(),
        };
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}

/// Which wallpaper checks are enabled and how loose the aspect-ratio check is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidatePolicy {
    /// Image must be at least as large as the screen in both dimensions.
    pub absolute_size: bool,
    /// Screen and image aspect ratios must agree within `ratio_bound`.
    pub screen_ratio: bool,
    /// Allowed relative deviation of `screen_ratio / img_ratio` from 1.
    pub ratio_bound: f64,
}

impl Default for CandidatePolicy {
    fn default() -> Self {
        Self {
            absolute_size: true,
            screen_ratio: true,
            ratio_bound: WallpaperConsts::DEFAULT_RATIO_BOUND,
        }
    }
}

/// Which APOD API body to parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FetchFormat {
    /// Parse the JSON object; the metadata file is the object itself.
    #[default]
    Json,
    /// Treat the body as delimited `key:value` text; the metadata file is one field per line.
    Text,
}

/// How text-mode page text is reassembled into fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FieldParser {
    /// Single-pass scanner with `key:` lookahead.
    #[default]
    Scanner,
    /// Split on commas and glue the explanation back between its start/end markers.
    Markers,
}

/// Metadata carried alongside the image.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordInfo {
    Fields(FieldRecord),
    Json(serde_json::Value),
}

/// Everything needed to download and store one APOD image.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRecord {
    /// Absolute URL of the highest-resolution image available.
    pub url: String,
    /// Filename stem.
    pub title: String,
    /// Filename suffix without the dot.
    pub extension: String,
    pub info: RecordInfo,
}

impl ImageRecord {
    /// `title.extension`, the basename of [`Self::url`].
    pub fn basename(&self) -> String {
        format!("{}.{}", self.title, self.extension)
    }

    /// Name of the metadata file written next to the image.
    pub fn metadata_filename(&self) -> String {
        match self.info {
            RecordInfo::Fields(_) => self.title.clone(),
            RecordInfo::Json(_) => format!("{}.json", self.title),
        }
    }

    pub fn metadata_contents(&self) -> serde_json::Result<String> {
        match &self.info {
            RecordInfo::Fields(fields) => Ok(fields.serialize()),
            RecordInfo::Json(value) => serde_json::to_string(value),
        }
    }
}

/// Options for the `fetch` command.
#[derive(Clone, Debug)]
pub struct FetchOpts {
    /// Images land in `<base_dir>/apod/<YYYY-MM>/`.
    pub base_dir: PathBuf,
    pub format: FetchFormat,
    pub parser: FieldParser,
    pub api_url: String,
    pub host_prefix: String,
    /// Parse and report only; nothing is downloaded or written.
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for FetchOpts {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            format: FetchFormat::default(),
            parser: FieldParser::default(),
            api_url: ApiConsts::APOD_URL.to_string(),
            host_prefix: crate::parse::DEFAULT_HOST_PREFIX.to_string(),
            dry_run: false,
            verbose: false,
        }
    }
}

/// Options for the `wallpapers` command.
#[derive(Clone, Debug)]
pub struct WallpaperOpts {
    /// Directory searched recursively for images.
    pub root: PathBuf,
    /// Display resolution; required before classification.
    pub screen: Option<Size2D>,
    pub policy: CandidatePolicy,
    /// Allowed extensions, lowercase, without dot.
    pub extensions: Vec<String>,
    pub follow_links: bool,
    /// Candidate list file. Relative paths resolve against `root`.
    pub list_file: PathBuf,
    /// Copy candidates into this directory (relative paths resolve against `root`).
    pub copy_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for WallpaperOpts {
    fn default() -> Self {
        let paths = PackagePaths::get();
        Self {
            root: PathBuf::from("."),
            screen: None,
            policy: CandidatePolicy::default(),
            extensions: WallpaperConsts::default_extensions(),
            follow_links: false,
            list_file: PathBuf::from(paths.list_filename()),
            copy_dir: None,
            verbose: false,
        }
    }
}
