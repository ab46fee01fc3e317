//! Wallpaper suitability checks: absolute size and screen aspect ratio.

use super::error::ClassifyError;
use crate::{CandidatePolicy, Size2D};

fn ratio(size: Size2D) -> Result<f64, ClassifyError> {
    if size.height == 0 {
        return Err(ClassifyError::ZeroHeight {
            width: size.width,
            height: size.height,
        });
    }
    Ok(f64::from(size.width) / f64::from(size.height))
}

/// Accept only a finite, non-negative ratio bound. Negative or NaN bounds would reject every image.
pub fn check_ratio_bound(bound: f64) -> Result<f64, ClassifyError> {
    if bound.is_finite() && bound >= 0.0 {
        Ok(bound)
    } else {
        Err(ClassifyError::InvalidRatioBound {
            bound: bound.to_string(),
        })
    }
}

/// Image covers the screen in both dimensions.
pub fn by_absolute_size(img: Size2D, screen: Size2D) -> bool {
    img.width >= screen.width && img.height >= screen.height
}

/// `screen_ratio / img_ratio` lies within `[1 - bound, 1 + bound]`.
pub fn by_screen_ratio(img: Size2D, screen: Size2D, bound: f64) -> Result<bool, ClassifyError> {
    let screen_ratio = ratio(screen)?;
    let img_ratio = ratio(img)?;
    let r = screen_ratio / img_ratio;
    Ok((1.0 - bound) <= r && r <= (1.0 + bound))
}

/// AND of the checks enabled in `policy`. Both sizes are validated up front when the ratio check
/// is on, so a zero height fails even if the size check alone would already reject the image.
pub fn is_candidate(
    img: Size2D,
    screen: Size2D,
    policy: &CandidatePolicy,
) -> Result<bool, ClassifyError> {
    if policy.screen_ratio {
        ratio(screen)?;
        ratio(img)?;
    }
    if policy.absolute_size && !by_absolute_size(img, screen) {
        return Ok(false);
    }
    if policy.screen_ratio && !by_screen_ratio(img, screen, policy.ratio_bound)? {
        return Ok(false);
    }
    Ok(true)
}
