// src/fetch/file.rs

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use super::LabelSource;

/// Reads labels from a local copy of the CSV.
#[derive(Debug, Clone)]
pub struct FileLabelSource {
    path: PathBuf,
}

impl FileLabelSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LabelSource for FileLabelSource {
    async fn fetch_labels(&self) -> Result<String> {
        debug!(path = %self.path.display(), "reading labels file");
        fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading labels from {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
