//! Loaders for vision dataset files: pickles, json, text lines, images and
//! depth maps.
//!
//! The image and depth readers also take a [`Batch`] of paths (a list, a keyed
//! map, or any nesting of them) and return decoded values in the same shape.

pub mod batch;
pub mod config;
pub mod depth;
pub mod error;
pub mod image;
mod json;
mod pickle;
mod reader;
mod text;

// Re-export commonly used types
pub use batch::Batch;
pub use config::{ImageLimits, PickleConfig, ReadConfig};
pub use depth::{DepthFormat, DepthMap, NPZ_DEPTH_KEY, PNG_DEPTH_MIN_MAX, PNG_DEPTH_SCALE};
pub use error::{ErrorKind, ReadError, Result};
pub use image::DynamicImage;
pub use pickle::{pickle_path, PICKLE_EXTENSION};
pub use reader::Reader;

use serde::de::DeserializeOwned;

use std::path::{Path, PathBuf};

pub fn read_pickle(path: impl AsRef<Path>) -> Result<serde_pickle::Value> {
    Reader::default().read_pickle(path)
}

pub fn read_pickle_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    Reader::default().read_pickle_as(path)
}

pub fn read_json(path: impl AsRef<Path>) -> Result<serde_json::Value> {
    Reader::default().read_json(path)
}

pub fn read_json_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    Reader::default().read_json_as(path)
}

pub fn read_txt(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Reader::default().read_txt(path)
}

pub fn read_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    Reader::default().read_image(path)
}

pub fn read_images(paths: &Batch<PathBuf>) -> Result<Batch<DynamicImage>> {
    Reader::default().read_images(paths)
}

pub fn read_depth(path: impl AsRef<Path>) -> Result<DepthMap> {
    Reader::default().read_depth(path)
}

pub fn read_depths(paths: &Batch<PathBuf>) -> Result<Batch<DepthMap>> {
    Reader::default().read_depths(paths)
}
