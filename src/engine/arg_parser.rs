use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::{FetchFormat, FieldParser, Size2D};

struct DefaultArgs;

impl DefaultArgs {
    pub const DIR: &'static str = ".";
}

/// Astronomy Picture of the Day downloader and wallpaper filter.
#[derive(Clone, Parser)]
#[command(name = "apodwall")]
#[command(about = "Download today's APOD image, or pick wallpaper candidates from a photo collection.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output.
    #[arg(long, short = 'v', global = true, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    /// Download today's image and its metadata into BASE_DIR/apod/YYYY-MM/.
    Fetch(FetchArgs),
    /// Find images under DIR that fit the screen and list (or copy) them.
    Wallpapers(WallpaperArgs),
}

#[derive(Clone, Args)]
pub struct FetchArgs {
    /// Base directory. Default: current directory.
    #[arg(value_name = "BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// API response format to parse.
    #[arg(long, value_enum)]
    pub format: Option<FetchFormat>,

    /// Field reassembly strategy for --format text.
    #[arg(long, value_enum)]
    pub parser: Option<FieldParser>,

    /// APOD API endpoint.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Host prefix image URLs must start with (text format).
    #[arg(long)]
    pub host_prefix: Option<String>,

    /// Fetch and parse only; print the record without downloading or writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Args)]
pub struct WallpaperArgs {
    /// Directory to search recursively. Default: current directory.
    #[arg(value_name = "DIR", default_value = DefaultArgs::DIR)]
    pub dir: PathBuf,

    /// Screen resolution as WIDTHxHEIGHT, e.g. 1920x1080.
    #[arg(long, short = 's')]
    pub screen: Option<Size2D>,

    /// Require images at least as large as the screen.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub absolute_size: Option<bool>,

    /// Require the image aspect ratio to match the screen within --ratio-bound.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub screen_ratio: Option<bool>,

    /// Allowed relative deviation between screen and image aspect ratios.
    #[arg(long, short = 'r', value_parser = clap::value_parser!(f64))]
    pub ratio_bound: Option<f64>,

    /// Allowed extensions (case-insensitive). Can specify multiple: -e jpg png
    #[arg(long, short = 'e', num_args = 1..)]
    pub extensions: Vec<String>,

    /// Follow symbolic links.
    #[arg(long, short = 'f', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub follow_links: Option<bool>,

    /// Candidate list file. Default: wallpaper_candidates.txt in DIR.
    #[arg(long, short = 'o')]
    pub list_file: Option<PathBuf>,

    /// Copy candidates into --copy-dir (default: wallpapers/ in DIR).
    #[arg(long, short = 'c', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub copy: Option<bool>,

    /// Destination for --copy.
    #[arg(long)]
    pub copy_dir: Option<PathBuf>,
}
