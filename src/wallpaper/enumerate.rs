//! Recursive image discovery: walks a tree and keeps files with an allowed extension.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One result from a directory walk: either a path to consider or an error with optional path.
pub enum WalkOutcome {
    Ok(PathBuf),
    Err { msg: String, path: Option<PathBuf> },
}

/// Convert a walkdir result into [`WalkOutcome`]. Only regular files (after link resolution when
/// following links) come through as `Ok`.
pub fn to_outcome(r: Result<walkdir::DirEntry, walkdir::Error>) -> Option<WalkOutcome> {
    match r {
        Ok(entry) if entry.file_type().is_file() => Some(WalkOutcome::Ok(entry.into_path())),
        Ok(_) => None,
        Err(err) => Some(WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        }),
    }
}

/// Filters applied while walking.
#[derive(Clone, Debug, Default)]
pub struct FindFilter {
    /// Allowed extensions, compared case-insensitively, without dot.
    pub extensions: Vec<String>,
    pub follow_links: bool,
    /// Directories (canonical) whose contents are never reported, e.g. the copy destination.
    pub exclude_dirs: Vec<PathBuf>,
}

/// OS metadata files that carry image extensions but are not images (e.g. macOS `._photo.jpg`).
pub fn is_os_hidden_file(path: &Path) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => matches!(name, ".DS_Store" | "Thumbs.db") || name.starts_with("._"),
        None => false,
    }
}

/// Extension of `path` is in `extensions` (case-insensitive; a leading dot in the list is ignored).
pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

fn should_include(path: &Path, filter: &FindFilter) -> bool {
    if is_os_hidden_file(path) || !has_allowed_extension(path, &filter.extensions) {
        return false;
    }
    !filter.exclude_dirs.iter().any(|dir| path.starts_with(dir))
}

/// Recursively find image files under `root`. Returns absolute paths, sorted.
///
/// Unreadable entries are logged and skipped.
pub fn find_images(root: &Path, filter: &FindFilter) -> Result<Vec<PathBuf>> {
    let root = root
        .canonicalize()
        .with_context(|| format!("resolve image root {}", root.display()))?;
    debug!("Searching {} for {:?}", root.display(), filter.extensions);

    let mut images = Vec::new();
    let mut skipped = 0_usize;
    let walk = WalkDir::new(&root)
        .follow_links(filter.follow_links)
        .into_iter()
        .filter_map(to_outcome);
    for outcome in walk {
        match outcome {
            WalkOutcome::Ok(path) => {
                if should_include(&path, filter) {
                    images.push(path);
                }
            }
            WalkOutcome::Err { msg, path } => {
                skipped += 1;
                match path {
                    Some(p) => warn!("Skipping {}: {}", p.display(), msg),
                    None => warn!("Skipping entry: {}", msg),
                }
            }
        }
    }
    if skipped > 0 {
        warn!("Skipped {} entries due to access errors", skipped);
    }
    images.sort();
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive() {
        let exts = vec!["jpg".to_string(), ".png".to_string()];
        assert!(has_allowed_extension(Path::new("/a/b.JPG"), &exts));
        assert!(has_allowed_extension(Path::new("/a/b.png"), &exts));
        assert!(!has_allowed_extension(Path::new("/a/b.gif"), &exts));
        assert!(!has_allowed_extension(Path::new("/a/jpg"), &exts));
    }

    #[test]
    fn resource_forks_are_hidden() {
        assert!(is_os_hidden_file(Path::new("/a/._photo.jpg")));
        assert!(!is_os_hidden_file(Path::new("/a/photo.jpg")));
    }
}
