//! Pickle reader

use serde::de::DeserializeOwned;
use serde_pickle::Value;

use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::PickleConfig;
use crate::error::{ReadError, Result};

pub const PICKLE_EXTENSION: &str = ".pkl";

/// Append `.pkl` unless the file name already ends with it.
///
/// Appends rather than replaces, so `scene.v2` becomes `scene.v2.pkl`.
pub fn pickle_path(path: &Path) -> PathBuf {
    if path.as_os_str().to_string_lossy().ends_with(PICKLE_EXTENSION) {
        return path.to_owned();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(PICKLE_EXTENSION);
    PathBuf::from(name)
}

fn open(path: &Path) -> Result<(PathBuf, BufReader<File>)> {
    let path = pickle_path(path);
    let file = File::open(&path).map_err(|e| ReadError::io(&path, e))?;
    Ok((path, BufReader::new(file)))
}

#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub(crate) fn read_value(path: &Path, config: PickleConfig) -> Result<Value> {
    let (path, reader) = open(path)?;
    serde_pickle::value_from_reader(reader, config.to_options())
        .map_err(|source| ReadError::Deserialization { path, source })
}

#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub(crate) fn read_typed<T: DeserializeOwned>(path: &Path, config: PickleConfig) -> Result<T> {
    let (path, reader) = open(path)?;
    serde_pickle::from_reader(reader, config.to_options())
        .map_err(|source| ReadError::Deserialization { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_missing_extension() {
        assert_eq!(pickle_path(Path::new("data/x")), Path::new("data/x.pkl"));
        assert_eq!(
            pickle_path(Path::new("data/x.v2")),
            Path::new("data/x.v2.pkl")
        );
    }

    #[test]
    fn keeps_existing_extension() {
        assert_eq!(pickle_path(Path::new("x.pkl")), Path::new("x.pkl"));
    }
}
