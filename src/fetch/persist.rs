//! Writing a downloaded image and its metadata into `<base>/apod/<YYYY-MM>/`.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ImageRecord;
use crate::utils::config::PackagePaths;

/// Current local month as `YYYY-MM`.
pub fn current_month() -> String {
    chrono::Local::now().format("%Y-%m").to_string()
}

/// Ensure `<base>/apod/<month>/` exists and return it.
pub fn download_dir(base: &Path, month: &str) -> Result<PathBuf> {
    let dir = base.join(PackagePaths::get().download_dirname()).join(month);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Write the image bytes as `<title>.<extension>` and the metadata file next to it.
/// Returns the image path.
pub fn persist(record: &ImageRecord, image: &[u8], dir: &Path) -> Result<PathBuf> {
    let image_path = dir.join(record.basename());
    fs::write(&image_path, image)
        .with_context(|| format!("write image {}", image_path.display()))?;

    let info_path = dir.join(record.metadata_filename());
    let contents = record
        .metadata_contents()
        .context("serialize image metadata")?;
    fs::write(&info_path, contents)
        .with_context(|| format!("write metadata {}", info_path.display()))?;
    debug!(
        "Wrote {} and {}",
        image_path.display(),
        info_path.display()
    );
    Ok(image_path)
}
