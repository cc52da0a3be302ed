use serde::de::DeserializeOwned;
use serde::Deserialize;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{ReadError, Result};

/// Parse the whole file. Nesting depth is unbounded; deep trees grow the stack
/// on the heap instead of overflowing it.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub(crate) fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| ReadError::io(path, e))?;
    let mut de = serde_json::Deserializer::from_reader(BufReader::new(file));
    de.disable_recursion_limit();

    T::deserialize(serde_stacker::Deserializer::new(&mut de))
        .and_then(|value| de.end().map(|()| value))
        .map_err(|source| ReadError::Parse {
            path: path.to_owned(),
            source,
        })
}
