//! Load `.apodwall.toml` from a directory (CLI only). Lib callers build `FetchOpts` /
//! `WallpaperOpts` themselves.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::utils::config::PackagePaths;
use crate::wallpaper::check_ratio_bound;
use crate::{FetchFormat, FetchOpts, FieldParser, Size2D, WallpaperOpts};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApodwallToml {
    #[serde(default)]
    fetch: FetchSection,
    #[serde(default)]
    wallpapers: WallpaperSection,
}

#[derive(Debug, Default, Deserialize)]
struct FetchSection {
    base_dir: Option<String>,
    format: Option<FetchFormat>,
    parser: Option<FieldParser>,
    api_url: Option<String>,
    host_prefix: Option<String>,
    verbose: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct WallpaperSection {
    screen: Option<String>,
    absolute_size: Option<bool>,
    screen_ratio: Option<bool>,
    ratio_bound: Option<f64>,
    extensions: Option<Vec<String>>,
    follow_links: Option<bool>,
    list_file: Option<String>,
    copy: Option<bool>,
    copy_dir: Option<String>,
    verbose: Option<bool>,
}

/// Load `.apodwall.toml` from `dir` if present. Returns None if the file is missing, unreadable or
/// invalid (invalid files are reported). CLI only.
pub(crate) fn load_apodwall_toml(dir: &Path) -> Option<ApodwallToml> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = std::fs::read_to_string(&path).ok()?;
    toml::from_str(&s)
        .map_err(|e| log::warn!("{}: {}", path.display(), e))
        .ok()
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $($opts_field:ident).+) => {
        if let Some(v) = $sec.$sec_field.clone() {
            $opts.$($opts_field).+ = v;
        }
    };
}

/// Apply the `[fetch]` section (only fields present in the file). Call before applying CLI.
pub(crate) fn apply_file_to_fetch_opts(file: &ApodwallToml, opts: &mut FetchOpts) {
    let sec = &file.fetch;
    if let Some(ref p) = sec.base_dir {
        opts.base_dir = PathBuf::from(p);
    }
    apply_file_opt!(sec, opts, format => format);
    apply_file_opt!(sec, opts, parser => parser);
    apply_file_opt!(sec, opts, api_url => api_url);
    apply_file_opt!(sec, opts, host_prefix => host_prefix);
    apply_file_opt!(sec, opts, verbose => verbose);
}

/// Apply the `[wallpapers]` section (only fields present in the file). Call before applying CLI.
/// Dry-run style flags never come from the file; an unparsable `screen` is reported and ignored.
pub(crate) fn apply_file_to_wallpaper_opts(file: &ApodwallToml, opts: &mut WallpaperOpts) {
    let sec = &file.wallpapers;
    if let Some(ref s) = sec.screen {
        match s.parse::<Size2D>() {
            Ok(size) => opts.screen = Some(size),
            Err(e) => log::warn!("{}: {}", PackagePaths::get().config_filename(), e),
        }
    }
    apply_file_opt!(sec, opts, absolute_size => policy.absolute_size);
    apply_file_opt!(sec, opts, screen_ratio => policy.screen_ratio);
    if let Some(bound) = sec.ratio_bound {
        match check_ratio_bound(bound) {
            Ok(bound) => opts.policy.ratio_bound = bound,
            Err(e) => log::warn!("{}: {}", PackagePaths::get().config_filename(), e),
        }
    }
    apply_file_opt!(sec, opts, extensions => extensions);
    apply_file_opt!(sec, opts, follow_links => follow_links);
    if let Some(ref p) = sec.list_file {
        opts.list_file = PathBuf::from(p);
    }
    if let Some(ref p) = sec.copy_dir {
        opts.copy_dir = Some(PathBuf::from(p));
    }
    if sec.copy == Some(true) && opts.copy_dir.is_none() {
        opts.copy_dir = Some(PathBuf::from(PackagePaths::get().copy_dirname()));
    }
    if sec.copy == Some(false) {
        opts.copy_dir = None;
    }
    apply_file_opt!(sec, opts, verbose => verbose);
}
