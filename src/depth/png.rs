use imageproc::image::DynamicImage;
use ndarray::Array2;

use std::path::Path;

use super::DepthMap;
use crate::config::ImageLimits;
use crate::error::{ReadError, Result};

/// Fixed-point scale of png depth: depth = pixel / 256.
pub const PNG_DEPTH_SCALE: f64 = 256.0;

/// A png depth file must have some pixel above this, or it is an 8-bit picture
/// rather than 16-bit depth.
pub const PNG_DEPTH_MIN_MAX: u32 = 255;

pub(super) fn read(path: &Path, limits: ImageLimits) -> Result<DepthMap> {
    let img = crate::image::read(path, limits)?;
    let (width, height) = (img.width() as usize, img.height() as usize);

    let pixels: Vec<u32> = match img {
        DynamicImage::ImageLuma16(buf) => buf.into_raw().into_iter().map(u32::from).collect(),
        DynamicImage::ImageLuma8(buf) => buf.into_raw().into_iter().map(u32::from).collect(),
        // a tRNS chunk expands gray depth to gray + alpha; alpha carries no depth
        DynamicImage::ImageLumaA16(buf) => buf.pixels().map(|p| u32::from(p.0[0])).collect(),
        DynamicImage::ImageLumaA8(buf) => buf.pixels().map(|p| u32::from(p.0[0])).collect(),
        other => {
            tracing::warn!(color = ?other.color(), "depth png is not grayscale");
            return Err(wrong_depth_file(path));
        }
    };

    let max = pixels.iter().copied().max().unwrap_or(0);
    if max <= PNG_DEPTH_MIN_MAX {
        tracing::warn!(max, "depth png never exceeds 8-bit range");
        return Err(wrong_depth_file(path));
    }

    let pixels = Array2::from_shape_vec((height, width), pixels).map_err(|e| {
        ReadError::InvalidFormat {
            path: path.to_owned(),
            reason: e.to_string(),
        }
    })?;

    Ok(pixels.mapv(|v| f64::from(v) / PNG_DEPTH_SCALE))
}

fn wrong_depth_file(path: &Path) -> ReadError {
    ReadError::InvalidFormat {
        path: path.to_owned(),
        reason: "wrong depth file".to_owned(),
    }
}
