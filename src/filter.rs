//! Wallpaper filter: find images under a root, keep the ones that suit the screen.

use anyhow::{Context, Result, anyhow};
use kdam::Animation;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::WallpaperOpts;
use crate::engine::progress::{ProgressBarConfig, create_progress_bar};
use crate::wallpaper::{
    CandidateReport, DimensionProbe, FindFilter, check_ratio_bound, collect_candidates,
    copy_candidates, find_images, write_candidate_list,
};

fn under_root(root: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

/// Find, classify, list and optionally copy wallpaper candidates under `opts.root`.
pub fn filter_wallpapers<P: DimensionProbe>(opts: &WallpaperOpts, probe: &P) -> Result<CandidateReport> {
    let screen = opts
        .screen
        .ok_or_else(|| anyhow!("screen size not configured; pass --screen WIDTHxHEIGHT"))?;
    check_ratio_bound(opts.policy.ratio_bound)?;
    let root = opts
        .root
        .canonicalize()
        .with_context(|| format!("resolve {}", opts.root.display()))?;

    let copy_dir = opts.copy_dir.as_deref().map(|d| under_root(&root, d));
    let filter = FindFilter {
        extensions: opts.extensions.clone(),
        follow_links: opts.follow_links,
        exclude_dirs: copy_dir
            .iter()
            .filter_map(|d| d.canonicalize().ok())
            .collect(),
    };
    let images = find_images(&root, &filter)?;
    info!("Found {} images under {}", images.len(), root.display());
    debug!("Screen {}, policy {:?}", screen, opts.policy);

    let bar = opts.verbose.then(|| {
        create_progress_bar(ProgressBarConfig::new(
            images.len(),
            "Classifying",
            Animation::Classic,
        ))
    });
    let report = collect_candidates(&images, screen, &opts.policy, probe, bar.as_ref());
    if !report.skipped.is_empty() {
        warn!("Skipped {} unreadable images", report.skipped.len());
    }
    info!(
        "{} of {} images are wallpaper candidates",
        report.candidates.len(),
        report.total()
    );

    write_candidate_list(&report, &under_root(&root, &opts.list_file))?;
    if let Some(dir) = copy_dir {
        copy_candidates(&report, &dir)?;
    }
    Ok(report)
}
