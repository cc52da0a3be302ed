use ndarray::Array2;
use ndarray_npy::{ReadNpyError, ReadNpyExt, ReadableElement};
use zip::ZipArchive;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::{DepthMap, NPZ_DEPTH_KEY};
use crate::error::{ReadError, Result};

type Archive = ZipArchive<BufReader<File>>;

/// Read the `depth` array of an `.npz` archive as stored, without scaling.
///
/// Any float or integer element type is accepted and widened to f64.
pub(super) fn read(path: &Path) -> Result<DepthMap> {
    let file = File::open(path).map_err(|e| ReadError::io(path, e))?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|source| ReadError::Archive {
        path: path.to_owned(),
        source,
    })?;

    // numpy names entries `<key>.npy`; accept a bare key too
    let npy_name = format!("{NPZ_DEPTH_KEY}.npy");
    let index = archive
        .index_for_name(&npy_name)
        .or_else(|| archive.index_for_name(NPZ_DEPTH_KEY))
        .ok_or_else(|| ReadError::MissingKey {
            path: path.to_owned(),
            key: NPZ_DEPTH_KEY,
        })?;

    if let Some(depth) = read_as::<f64>(&mut archive, index, path, std::convert::identity)? {
        return Ok(depth);
    }
    if let Some(depth) = read_as::<f32>(&mut archive, index, path, f64::from)? {
        return Ok(depth);
    }
    if let Some(depth) = read_as::<u16>(&mut archive, index, path, f64::from)? {
        return Ok(depth);
    }
    if let Some(depth) = read_as::<u8>(&mut archive, index, path, f64::from)? {
        return Ok(depth);
    }
    if let Some(depth) = read_as::<i32>(&mut archive, index, path, f64::from)? {
        return Ok(depth);
    }
    if let Some(depth) = read_as::<u32>(&mut archive, index, path, f64::from)? {
        return Ok(depth);
    }
    if let Some(depth) = read_as::<i16>(&mut archive, index, path, f64::from)? {
        return Ok(depth);
    }
    if let Some(depth) = read_as::<i8>(&mut archive, index, path, f64::from)? {
        return Ok(depth);
    }
    if let Some(depth) = read_as::<i64>(&mut archive, index, path, |v| v as f64)? {
        return Ok(depth);
    }
    if let Some(depth) = read_as::<u64>(&mut archive, index, path, |v| v as f64)? {
        return Ok(depth);
    }

    Err(ReadError::InvalidFormat {
        path: path.to_owned(),
        reason: format!("'{NPZ_DEPTH_KEY}' array has an unsupported element type"),
    })
}

/// `Ok(None)` when the stored element type isn't `A`.
fn read_as<A: ReadableElement + Copy>(
    archive: &mut Archive,
    index: usize,
    path: &Path,
    widen: fn(A) -> f64,
) -> Result<Option<DepthMap>> {
    let entry = archive.by_index(index).map_err(|source| ReadError::Archive {
        path: path.to_owned(),
        source,
    })?;

    match Array2::<A>::read_npy(entry) {
        Ok(array) => Ok(Some(array.mapv(widen))),
        Err(ReadNpyError::WrongDescriptor(_)) => Ok(None),
        Err(ReadNpyError::WrongNdim(_, ndim)) => Err(ReadError::InvalidFormat {
            path: path.to_owned(),
            reason: format!("'{NPZ_DEPTH_KEY}' array has {ndim} dimensions, expected 2"),
        }),
        Err(source) => Err(ReadError::Array {
            path: path.to_owned(),
            source,
        }),
    }
}
