//! APOD download: fetch the day's record, parse it, store image and metadata.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

use crate::fetch::{Fetcher, current_month, download_dir, persist};
use crate::parse::{RecordExtractor, clean_page_text};
use crate::{FetchFormat, FetchOpts, ImageRecord};

/// Result of [`download_apod`]. `image_path` is `None` on a dry run.
#[derive(Debug)]
pub struct DownloadOutcome {
    pub record: ImageRecord,
    pub image_path: Option<PathBuf>,
}

/// Turn an API body into an [`ImageRecord`] according to `opts.format`.
pub fn parse_body(body: &str, opts: &FetchOpts) -> Result<ImageRecord> {
    match opts.format {
        FetchFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(body).context("API response is not JSON")?;
            Ok(ImageRecord::from_json(value)?)
        }
        FetchFormat::Text => {
            let extractor = RecordExtractor::new(&opts.host_prefix)
                .with_context(|| format!("invalid host prefix '{}'", opts.host_prefix))?;
            let text = clean_page_text(body);
            Ok(ImageRecord::from_page_text(&text, &extractor, opts.parser)?)
        }
    }
}

/// Query the API and parse the day's record. Nothing is written.
pub fn fetch_record<F: Fetcher>(fetcher: &F, opts: &FetchOpts, api_key: &str) -> Result<ImageRecord> {
    let body = fetcher
        .fetch_text(&opts.api_url, &[("api_key", api_key)])
        .context("Failed to query API")?;
    debug!("API returned {} bytes", body.len());
    parse_body(&body, opts).context("Failed to parse page")
}

/// Fetch, parse, then download the image into `<base_dir>/apod/<YYYY-MM>/` together with its
/// metadata file. Each failure names the stage it happened in.
pub fn download_apod<F: Fetcher>(
    fetcher: &F,
    opts: &FetchOpts,
    api_key: &str,
) -> Result<DownloadOutcome> {
    let record = fetch_record(fetcher, opts, api_key)?;
    info!("Today's image: {} ({})", record.basename(), record.url);
    if opts.dry_run {
        return Ok(DownloadOutcome {
            record,
            image_path: None,
        });
    }

    let image = fetcher
        .fetch_bytes(&record.url)
        .context("Failed to download image")?;
    let dir = download_dir(&opts.base_dir, &current_month()).context("Failed to write files")?;
    let image_path = persist(&record, &image, &dir).context("Failed to write files")?;
    info!("Saved {}", image_path.display());
    Ok(DownloadOutcome {
        record,
        image_path: Some(image_path),
    })
}
