//! Command handlers for fetch and wallpapers

use anyhow::Result;
use log::warn;

use crate::download::download_apod;
use crate::fetch::ApodClient;
use crate::filter::filter_wallpapers;
use crate::utils::get_api_key;
use crate::wallpaper::ImageCrateProbe;
use crate::{FetchOpts, RecordInfo, WallpaperOpts};

/// Handle fetch command
pub fn handle_fetch(opts: &FetchOpts) -> Result<()> {
    let api_key = get_api_key(&std::env::current_dir()?);
    if opts.dry_run {
        warn!("RUNNING IN DRY-RUN MODE. NOTHING WILL BE DOWNLOADED OR WRITTEN.");
    }
    let outcome = download_apod(&ApodClient::new(), opts, &api_key)?;
    if outcome.image_path.is_none() {
        let record = &outcome.record;
        println!("url: {}", record.url);
        println!("file: {}", record.basename());
        if let RecordInfo::Fields(fields) = &record.info {
            for line in fields.to_lines() {
                println!("  {}", line);
            }
        }
    }
    Ok(())
}

/// Handle wallpapers command
pub fn handle_wallpapers(opts: &WallpaperOpts) -> Result<()> {
    let report = filter_wallpapers(opts, &ImageCrateProbe)?;
    if opts.verbose {
        for (path, reason) in &report.skipped {
            eprintln!("  skipped: {} ({})", path.display(), reason);
        }
    }
    Ok(())
}
