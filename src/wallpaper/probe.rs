//! Reading declared image dimensions without decoding pixels.

use std::path::Path;

use super::error::ImageError;
use crate::Size2D;

/// Source of image dimensions. Lets the batch run against something other than real files.
pub trait DimensionProbe {
    fn dimensions(&self, path: &Path) -> Result<Size2D, ImageError>;
}

/// Reads the size from the image header via the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateProbe;

impl DimensionProbe for ImageCrateProbe {
    fn dimensions(&self, path: &Path) -> Result<Size2D, ImageError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|e| ImageError::InvalidImage {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidImage {
                path: path.to_path_buf(),
                reason: format!("declared size {width}x{height}"),
            });
        }
        Ok(Size2D::new(width, height))
    }
}
