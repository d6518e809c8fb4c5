//! Core domain: on-disk configuration paths and RON file reading.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or parsing a RON configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read file '{path}': {details}")]
    Read { path: String, details: String },

    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },
}

/// Where tuning and level data live on disk
#[derive(Resource, Debug, Clone)]
pub struct AssetPaths {
    pub data_dir: PathBuf,
    pub levels_dir: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
            levels_dir: PathBuf::from("assets/levels"),
        }
    }
}

impl AssetPaths {
    pub fn tuning_file(&self) -> PathBuf {
        self.data_dir.join("tuning.ron")
    }

    pub fn campaign_file(&self) -> PathBuf {
        self.levels_dir.join("campaign.ron")
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn read_text(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

/// Parse a RON document; `source` names it in error messages.
pub fn parse_ron<T>(source: &str, contents: &str) -> Result<T, ConfigError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigError::Parse {
            path: source.to_string(),
            details: e.to_string(),
        })
}

pub fn load_ron_file<T>(path: &Path) -> Result<T, ConfigError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_text(path)?;
    parse_ron(&path.display().to_string(), &contents)
}
