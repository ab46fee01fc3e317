//! Writing the candidate list and copying candidates into one directory.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::candidates::CandidateReport;

/// Write one candidate path per line to `path`, replacing any previous list.
pub fn write_candidate_list(report: &CandidateReport, path: &Path) -> Result<()> {
    let mut file = fs::File::create(path)
        .with_context(|| format!("create candidate list {}", path.display()))?;
    for candidate in &report.candidates {
        writeln!(file, "{}", candidate.display())
            .with_context(|| format!("write candidate list {}", path.display()))?;
    }
    info!(
        "Wrote {} candidates to {}",
        report.candidates.len(),
        path.display()
    );
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copy every candidate into `out_dir` (created if needed), keeping its file name.
/// A candidate that already is the destination file is left alone. Returns the copied paths.
pub fn copy_candidates(report: &CandidateReport, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create copy directory {}", out_dir.display()))?;
    let mut copied = Vec::with_capacity(report.candidates.len());
    for src in &report.candidates {
        let Some(name) = src.file_name() else {
            warn!("Skipping {}: no file name", src.display());
            continue;
        };
        let dest = out_dir.join(name);
        if same_file(src, &dest) {
            debug!("{} already in {}", src.display(), out_dir.display());
            continue;
        }
        if copied.contains(&dest) {
            warn!(
                "{} overwrites an earlier candidate with the same name",
                src.display()
            );
        }
        fs::copy(src, &dest)
            .with_context(|| format!("copy {} to {}", src.display(), dest.display()))?;
        if !copied.contains(&dest) {
            copied.push(dest);
        }
    }
    info!("Copied {} images to {}", copied.len(), out_dir.display());
    Ok(copied)
}
