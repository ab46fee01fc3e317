//! Network fetch and on-disk persistence for the APOD downloader.

pub mod client;
pub mod persist;

pub use client::{ApodClient, Fetcher};
pub use persist::{current_month, download_dir, persist};
