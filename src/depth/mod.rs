//! Depth map reading
//!
//! Depth comes either as a numpy archive holding a `depth` array, stored in
//! physical units, or as a 16-bit png holding depth in 1/256 fixed point.
//! Pixels with value 0 carry no valid depth.

mod npz;
mod png;

pub use png::{PNG_DEPTH_MIN_MAX, PNG_DEPTH_SCALE};

use ndarray::Array2;

use std::path::Path;

use crate::config::ImageLimits;
use crate::error::{ReadError, Result};

/// Per-pixel depth `[height, width]`. Invalid pixels are 0.
pub type DepthMap = Array2<f64>;

/// Name of the array holding depth inside an `.npz` archive.
pub const NPZ_DEPTH_KEY: &str = "depth";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFormat {
    Npz,
    Png,
}

impl DepthFormat {
    /// Pick the format from the path's suffix.
    ///
    /// `.dpt` files are a known depth format but there is no decoder for them,
    /// so they land in `None` alongside every other suffix.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.as_os_str().to_string_lossy();
        if name.ends_with("npz") {
            Some(DepthFormat::Npz)
        } else if name.ends_with("png") {
            Some(DepthFormat::Png)
        } else {
            None
        }
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub(crate) fn read(path: &Path, limits: ImageLimits) -> Result<DepthMap> {
    let format = DepthFormat::from_path(path).ok_or_else(|| ReadError::NotImplemented {
        path: path.to_owned(),
        reason: "depth extension not supported",
    })?;
    tracing::debug!(?format, "reading depth");

    let depth = match format {
        DepthFormat::Npz => npz::read(path)?,
        DepthFormat::Png => png::read(path, limits)?,
    };

    tracing::debug!(shape = ?depth.dim(), "decoded depth");
    Ok(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_suffix() {
        assert_eq!(
            DepthFormat::from_path(Path::new("d/0001.npz")),
            Some(DepthFormat::Npz)
        );
        assert_eq!(
            DepthFormat::from_path(Path::new("d/0001.png")),
            Some(DepthFormat::Png)
        );
        assert_eq!(DepthFormat::from_path(Path::new("d/0001.dpt")), None);
        assert_eq!(DepthFormat::from_path(Path::new("d/0001.xyz")), None);
    }

    #[test]
    fn unknown_suffix_is_rejected_before_touching_disk() {
        let err = read(Path::new("missing/0001.dpt"), ImageLimits::default()).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::NotImplemented);
    }
}
