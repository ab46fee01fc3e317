//! Application configuration constants.
//! File names, API endpoints and filter defaults in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Directory created under the base dir; months go below it.
    const DOWNLOAD_DIRNAME: &'static str = "apod";
    const LIST_FILENAME: &'static str = "wallpaper_candidates.txt";
    const COPY_DIRNAME: &'static str = "wallpapers";

    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Optional config file looked up in the working (or image root) directory.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    pub fn download_dirname(&self) -> &str {
        Self::DOWNLOAD_DIRNAME
    }

    pub fn list_filename(&self) -> &str {
        Self::LIST_FILENAME
    }

    pub fn copy_dirname(&self) -> &str {
        Self::COPY_DIRNAME
    }
}

// ---- APOD API ----

pub struct ApiConsts;

impl ApiConsts {
    pub const APOD_URL: &'static str = "https://api.nasa.gov/planetary/apod";
    /// Works without registration, rate limited per IP.
    pub const DEMO_KEY: &'static str = "DEMO_KEY";
    pub const API_KEY_ENV: &'static str = "NASA_API_KEY";
    pub const CONNECT_TIMEOUT_SECS: u64 = 5;
    pub const READ_TIMEOUT_SECS: u64 = 30;
    /// Upper bound on a downloaded image (bytes). 200 MB.
    pub const MAX_IMAGE_BYTES: u64 = 200 * 1024 * 1024;
}

// ---- Wallpaper filter ----

pub struct WallpaperConsts;

impl WallpaperConsts {
    pub const DEFAULT_RATIO_BOUND: f64 = 0.05;
    pub const DEFAULT_EXTENSIONS: [&'static str; 3] = ["jpg", "jpeg", "png"];

    pub fn default_extensions() -> Vec<String> {
        Self::DEFAULT_EXTENSIONS
            .iter()
            .map(|e| e.to_string())
            .collect()
    }
}
