//! On-disk layout for collector output, charts and logs.
//!
//! ```text
//! <root>/starbucks_stores/data/starbucks_ai.csv
//! <root>/starbucks_stores/log/
//! <root>/yes24/data/yes24_ai.csv
//! <root>/yes24/data/charts/*.png
//! <root>/yes24/log/
//! ```

use std::path::{Path, PathBuf};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    root: PathBuf,
}

impl OutputPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn store_data_dir(&self) -> PathBuf {
        self.root.join("starbucks_stores").join("data")
    }

    #[must_use]
    pub fn store_csv(&self) -> PathBuf {
        self.store_data_dir().join("starbucks_ai.csv")
    }

    #[must_use]
    pub fn store_log_dir(&self) -> PathBuf {
        self.root.join("starbucks_stores").join("log")
    }

    #[must_use]
    pub fn listing_data_dir(&self) -> PathBuf {
        self.root.join("yes24").join("data")
    }

    #[must_use]
    pub fn listing_csv(&self) -> PathBuf {
        self.listing_data_dir().join("yes24_ai.csv")
    }

    #[must_use]
    pub fn charts_dir(&self) -> PathBuf {
        self.listing_data_dir().join("charts")
    }

    #[must_use]
    pub fn listing_log_dir(&self) -> PathBuf {
        self.root.join("yes24").join("log")
    }

    /// Creates `dir` and its parents. An existing directory is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CreateDir`] when the directory cannot be created.
    pub fn ensure_dir(dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
            path: dir.display().to_string(),
            source,
        })
    }
}
