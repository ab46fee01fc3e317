//! Batch classification of image files against one screen size.

use log::{debug, warn};
use std::path::PathBuf;

use super::classify::is_candidate;
use super::probe::DimensionProbe;
use crate::engine::progress::{ProgressBar, update_progress_bar};
use crate::{CandidatePolicy, Size2D};

/// Outcome of a batch: accepted paths and files that could not be judged.
#[derive(Debug, Default)]
pub struct CandidateReport {
    pub candidates: Vec<PathBuf>,
    /// Number of files that were read and rejected.
    pub rejected: usize,
    /// Files that could not be read or classified, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

impl CandidateReport {
    pub fn total(&self) -> usize {
        self.candidates.len() + self.rejected + self.skipped.len()
    }
}

/// Classify every path. A file whose size cannot be read or classified is recorded in
/// [`CandidateReport::skipped`] and the batch carries on.
pub fn collect_candidates<P: DimensionProbe>(
    paths: &[PathBuf],
    screen: Size2D,
    policy: &CandidatePolicy,
    probe: &P,
    progress: Option<&ProgressBar>,
) -> CandidateReport {
    let mut report = CandidateReport::default();
    for path in paths {
        let verdict = probe
            .dimensions(path)
            .map_err(|e| e.to_string())
            .and_then(|size| {
                is_candidate(size, screen, policy)
                    .map(|ok| (size, ok))
                    .map_err(|e| format!("{}: {}", path.display(), e))
            });
        match verdict {
            Ok((size, true)) => {
                debug!("Candidate {} ({})", path.display(), size);
                report.candidates.push(path.clone());
            }
            Ok((size, false)) => {
                debug!("Rejected {} ({})", path.display(), size);
                report.rejected += 1;
            }
            Err(msg) => {
                warn!("{}", msg);
                report.skipped.push((path.clone(), msg));
            }
        }
        if let Some(pb) = progress {
            update_progress_bar(pb, 1);
        }
    }
    report
}
