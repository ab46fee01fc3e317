//! APOD download orchestration against a fake fetcher.

use anyhow::{Result, bail};
use apodwall::fetch::{Fetcher, current_month, download_dir, persist};
use apodwall::{FetchFormat, FetchOpts, FieldParser, download_apod, fetch_record};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

const BODY: &str = r#"{"date":"2021-06-01","explanation":"Stars, gas, and dust.","hdurl":"https://apod.nasa.gov/apod/image/2106/example_01.jpg","media_type":"image","title":"Dusty","url":"https://apod.nasa.gov/apod/image/2106/example_01_1024.jpg"}"#;

const IMAGE: &[u8] = b"\xFF\xD8\xFFfake-jpeg";

/// Serves one page body and one image; records requested URLs.
struct FakeFetcher {
    body: Option<&'static str>,
    image: Option<&'static [u8]>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    fn new(body: Option<&'static str>, image: Option<&'static [u8]>) -> Self {
        Self {
            body,
            image,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Fetcher for FakeFetcher {
    fn fetch_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        assert!(query.iter().any(|(k, _)| *k == "api_key"));
        match self.body {
            Some(b) => Ok(b.to_string()),
            None => bail!("{} returned HTTP 503 Service Unavailable", url),
        }
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        match self.image {
            Some(b) => Ok(b.to_vec()),
            None => bail!("connection reset"),
        }
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("apodwall-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn opts(base: PathBuf, format: FetchFormat) -> FetchOpts {
    FetchOpts {
        base_dir: base,
        format,
        ..FetchOpts::default()
    }
}

// --- download_dir / persist ---

#[test]
fn test_download_dir_is_idempotent() {
    let base = scratch_dir("dldir");
    let first = download_dir(&base, "2021-06").unwrap();
    let second = download_dir(&base, "2021-06").unwrap();
    assert_eq!(first, base.join("apod").join("2021-06"));
    assert_eq!(first, second);
    assert!(first.is_dir());
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn test_current_month_format() {
    let month = current_month();
    assert_eq!(month.len(), 7);
    assert_eq!(&month[4..5], "-");
}

// --- download_apod ---

#[test]
fn test_download_json_writes_image_and_metadata() {
    let base = scratch_dir("json");
    let fetcher = FakeFetcher::new(Some(BODY), Some(IMAGE));
    let outcome = download_apod(&fetcher, &opts(base.clone(), FetchFormat::Json), "KEY").unwrap();

    let dir = base.join("apod").join(current_month());
    assert_eq!(outcome.image_path, Some(dir.join("example_01.jpg")));
    assert_eq!(fs::read(dir.join("example_01.jpg")).unwrap(), IMAGE);

    let meta: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("example_01.json")).unwrap()).unwrap();
    assert_eq!(meta["title"], "Dusty");

    assert_eq!(
        fetcher.requests.borrow().as_slice(),
        [
            "https://api.nasa.gov/planetary/apod",
            "https://apod.nasa.gov/apod/image/2106/example_01.jpg"
        ]
    );
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn test_download_text_writes_field_lines() {
    let base = scratch_dir("text");
    let fetcher = FakeFetcher::new(Some(BODY), Some(IMAGE));
    for parser in [FieldParser::Scanner, FieldParser::Markers] {
        let o = FetchOpts {
            parser,
            ..opts(base.clone(), FetchFormat::Text)
        };
        download_apod(&fetcher, &o, "KEY").unwrap();

        let dir = base.join("apod").join(current_month());
        let info = fs::read_to_string(dir.join("example_01")).unwrap();
        let lines: Vec<&str> = info.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "explanation:Stars gas and dust.");
        assert!(dir.join("example_01.jpg").is_file());
    }
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn test_dry_run_writes_nothing() {
    let base = scratch_dir("dry");
    let fetcher = FakeFetcher::new(Some(BODY), Some(IMAGE));
    let o = FetchOpts {
        dry_run: true,
        ..opts(base.clone(), FetchFormat::Json)
    };
    let outcome = download_apod(&fetcher, &o, "KEY").unwrap();
    assert!(outcome.image_path.is_none());
    assert_eq!(outcome.record.basename(), "example_01.jpg");
    assert!(!base.join("apod").exists());
    assert_eq!(fetcher.requests.borrow().len(), 1);
    let _ = fs::remove_dir_all(&base);
}

// --- failures name their stage ---

#[test]
fn test_api_failure_names_stage() {
    let fetcher = FakeFetcher::new(None, None);
    let err = fetch_record(&fetcher, &FetchOpts::default(), "KEY").unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.starts_with("Failed to query API"), "{}", msg);
    assert!(msg.contains("503"));
}

#[test]
fn test_parse_failure_names_stage() {
    let fetcher = FakeFetcher::new(Some("{\"title\":\"no image\"}"), None);
    let err = fetch_record(&fetcher, &FetchOpts::default(), "KEY").unwrap_err();
    assert!(format!("{:#}", err).starts_with("Failed to parse page"));
    assert!(err.chain().any(|e| e.to_string().contains("image URL not found")));
}

#[test]
fn test_image_failure_names_stage() {
    let base = scratch_dir("imgfail");
    let fetcher = FakeFetcher::new(Some(BODY), None);
    let err = download_apod(&fetcher, &opts(base.clone(), FetchFormat::Json), "KEY").unwrap_err();
    assert!(format!("{:#}", err).starts_with("Failed to download image"));
    assert!(!base.join("apod").exists());
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn test_persist_text_metadata_has_no_extension() {
    let base = scratch_dir("persist");
    let text = apodwall::parse::clean_page_text(BODY);
    let record = apodwall::ImageRecord::from_page_text(
        &text,
        &apodwall::parse::RecordExtractor::default(),
        FieldParser::Scanner,
    )
    .unwrap();
    let path = persist(&record, IMAGE, &base).unwrap();
    assert_eq!(path, base.join("example_01.jpg"));
    let reparsed =
        apodwall::FieldRecord::parse_lines(&fs::read_to_string(base.join("example_01")).unwrap())
            .unwrap();
    assert_eq!(reparsed.get("title"), Some("Dusty"));
    let _ = fs::remove_dir_all(&base);
}
