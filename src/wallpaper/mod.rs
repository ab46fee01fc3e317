//! Wallpaper candidate filter: discovery, dimension probing, classification, output.

pub mod candidates;
pub mod classify;
pub mod enumerate;
pub mod error;
pub mod probe;
pub mod report;

pub use candidates::{CandidateReport, collect_candidates};
pub use classify::{by_absolute_size, by_screen_ratio, check_ratio_bound, is_candidate};
pub use enumerate::{FindFilter, find_images, has_allowed_extension};
pub use error::{ClassifyError, ImageError};
pub use probe::{DimensionProbe, ImageCrateProbe};
pub use report::{copy_candidates, write_candidate_list};
