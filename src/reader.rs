use serde::de::DeserializeOwned;

use std::path::{Path, PathBuf};

use crate::batch::Batch;
use crate::config::ReadConfig;
use crate::depth::{self, DepthMap};
use crate::error::Result;
use crate::image::{self, DynamicImage};
use crate::{json, pickle, text};

/// Every reader, bound to one [`ReadConfig`].
///
/// Holds no open files or caches; each call reads fresh from disk.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reader {
    config: ReadConfig,
}

impl Reader {
    pub fn new(config: ReadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReadConfig {
        &self.config
    }

    /// Unpickle `path`, appending `.pkl` if the name doesn't already end with it.
    pub fn read_pickle(&self, path: impl AsRef<Path>) -> Result<serde_pickle::Value> {
        pickle::read_value(path.as_ref(), self.config.pickle)
    }

    pub fn read_pickle_as<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        pickle::read_typed(path.as_ref(), self.config.pickle)
    }

    pub fn read_json(&self, path: impl AsRef<Path>) -> Result<serde_json::Value> {
        json::read(path.as_ref())
    }

    pub fn read_json_as<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        json::read(path.as_ref())
    }

    pub fn read_txt(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        text::read_lines(path.as_ref())
    }

    pub fn read_image(&self, path: impl AsRef<Path>) -> Result<DynamicImage> {
        image::read(path.as_ref(), self.config.image)
    }

    /// Decode every image in `paths`, keeping its shape. Fails on the first bad file.
    pub fn read_images(&self, paths: &Batch<PathBuf>) -> Result<Batch<DynamicImage>> {
        paths.try_map(|path| self.read_image(path))
    }

    pub fn read_depth(&self, path: impl AsRef<Path>) -> Result<DepthMap> {
        depth::read(path.as_ref(), self.config.image)
    }

    /// Read every depth map in `paths`, keeping its shape. Fails on the first bad file.
    pub fn read_depths(&self, paths: &Batch<PathBuf>) -> Result<Batch<DepthMap>> {
        paths.try_map(|path| self.read_depth(path))
    }
}
