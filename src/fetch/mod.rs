// src/fetch/mod.rs

use anyhow::Result;
use std::future::Future;

pub mod file;
pub mod http;
#[cfg(test)]
pub(crate) mod test_server;

pub use file::FileLabelSource;
pub use http::HttpLabelSource;

/// Community-maintained hash label list.
pub const DEFAULT_LABELS_URL: &str =
    "https://raw.githubusercontent.com/ultimate-research/param-labels/master/ParamLabels.csv";

/// Somewhere the raw label CSV text can be fetched from.
pub trait LabelSource {
    /// Retrieve the label text. The body is returned as-is, without parsing.
    fn fetch_labels(&self) -> impl Future<Output = Result<String>> + Send;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

/// Either label source, picked at startup from the configuration.
#[derive(Debug, Clone)]
pub enum AnySource {
    Http(HttpLabelSource),
    File(FileLabelSource),
}

impl LabelSource for AnySource {
    async fn fetch_labels(&self) -> Result<String> {
        match self {
            AnySource::Http(s) => s.fetch_labels().await,
            AnySource::File(s) => s.fetch_labels().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            AnySource::Http(s) => s.describe(),
            AnySource::File(s) => s.describe(),
        }
    }
}
