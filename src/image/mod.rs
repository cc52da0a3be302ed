//! Image reading

mod decode;

pub use decode::decode;
pub use imageproc::image::DynamicImage;

use std::path::Path;

use crate::config::ImageLimits;
use crate::error::Result;

#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub(crate) fn read(path: &Path, limits: ImageLimits) -> Result<DynamicImage> {
    let img = decode(path, limits)?;
    tracing::debug!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded image"
    );
    Ok(img)
}
