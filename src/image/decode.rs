//! Image decoding

use imageproc::image::{DynamicImage, ImageReader};

use std::path::Path;

use crate::config::ImageLimits;
use crate::error::{ReadError, Result};

/// Decode the image at `path`, sniffing the format from its contents before
/// falling back to the extension.
pub fn decode(path: &Path, limits: ImageLimits) -> Result<DynamicImage> {
    let decode_err = |source| ReadError::Decode {
        path: path.to_owned(),
        source,
    };

    let mut reader = ImageReader::open(path)
        .map_err(|e| ReadError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| ReadError::io(path, e))?;
    reader.limits(limits.to_limits());

    reader.decode().map_err(decode_err)
}
