use anyhow::{Context, Result};
use imageproc::image::Limits;
use serde::{Deserialize, Serialize};

use std::fs;
use std::path::Path;

/// Caps applied while decoding images. `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageLimits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub max_alloc: Option<u64>,
}

impl Default for ImageLimits {
    fn default() -> Self {
        let limits = Limits::default();
        Self {
            max_width: limits.max_image_width,
            max_height: limits.max_image_height,
            max_alloc: limits.max_alloc,
        }
    }
}

impl ImageLimits {
    pub fn unbounded() -> Self {
        Self {
            max_width: None,
            max_height: None,
            max_alloc: None,
        }
    }

    pub(crate) fn to_limits(self) -> Limits {
        let mut limits = Limits::no_limits();
        limits.max_image_width = self.max_width;
        limits.max_image_height = self.max_height;
        limits.max_alloc = self.max_alloc;
        limits
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickleConfig {
    /// Decode python 2 byte strings as text.
    pub decode_strings: bool,
    /// Replace globals that can't be resolved with `None` instead of failing.
    pub replace_unresolved_globals: bool,
}

impl PickleConfig {
    pub(crate) fn to_options(self) -> serde_pickle::DeOptions {
        let mut options = serde_pickle::DeOptions::new();
        if self.decode_strings {
            options = options.decode_strings();
        }
        if self.replace_unresolved_globals {
            options = options.replace_unresolved_globals();
        }
        options
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    pub image: ImageLimits,
    pub pickle: PickleConfig,
}

impl ReadConfig {
    /// Load a config from a json file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

#[test]
fn partial_config_fills_defaults() {
    let config: ReadConfig =
        serde_json::from_str(r#"{"image": {"max_width": 4096}}"#).unwrap();

    assert_eq!(config.image.max_width, Some(4096));
    assert_eq!(config.image.max_alloc, ImageLimits::default().max_alloc);
    assert_eq!(config.pickle, PickleConfig::default());
}

#[test]
fn load_reports_the_path() {
    let err = ReadConfig::load("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn load_from_json_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("read.json");
    fs::write(
        &path,
        r#"{"image": {"max_width": 8192, "max_height": 8192, "max_alloc": null},
            "pickle": {"decode_strings": true}}"#,
    )
    .unwrap();

    let config = ReadConfig::load(&path).unwrap();
    assert_eq!(
        config.image,
        ImageLimits {
            max_width: Some(8192),
            max_height: Some(8192),
            max_alloc: None,
        }
    );
    assert!(config.pickle.decode_strings);
    assert!(!config.pickle.replace_unresolved_globals);
}

#[test]
fn load_rejects_malformed_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("read.json");
    fs::write(&path, "{ image: ").unwrap();

    let err = ReadConfig::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config"));
}
