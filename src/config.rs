// src/config.rs

use anyhow::{bail, Result};
use clap::Parser;
use std::{path::PathBuf, time::Duration};

use crate::{
    app::OutputFormat,
    fetch::{AnySource, FileLabelSource, HttpLabelSource, DEFAULT_LABELS_URL},
    tree::TreeView,
};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "prcview",
    version,
    about = "Browse a param (.prc) file with community hash labels"
)]
pub struct Config {
    /// Param file to open
    pub param_file: PathBuf,

    /// Where to fetch the label CSV from
    #[arg(long, env = "PRCVIEW_LABELS_URL", default_value = DEFAULT_LABELS_URL)]
    pub labels_url: String,

    /// Read labels from a local CSV instead of the network
    #[arg(long, env = "PRCVIEW_LABELS_FILE")]
    pub labels_file: Option<PathBuf>,

    /// Label fetch timeout in seconds (0 waits forever)
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Extra attempts after a failed label fetch
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Backoff before the first retry, doubled each attempt
    #[arg(long, default_value_t = 500)]
    pub backoff_ms: u64,

    /// Levels expanded by default (1 = only the root)
    #[arg(long, default_value_t = 1)]
    pub depth: usize,

    /// Expand every node
    #[arg(long)]
    pub expand_all: bool,

    /// Flip expansion of the node at PATH, e.g. `fighter_param/0`
    #[arg(long = "expand", value_name = "PATH")]
    pub expand: Vec<String>,

    /// Print node names only
    #[arg(long)]
    pub hide_values: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
    pub format: OutputFormat,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn label_source(&self) -> Result<AnySource> {
        if let Some(path) = &self.labels_file {
            return Ok(AnySource::File(FileLabelSource::new(path)));
        }
        if self.labels_url.trim().is_empty() {
            bail!("labels URL must not be empty");
        }
        let source = HttpLabelSource::with_timeout(&self.labels_url, self.timeout())?
            .retries(self.retries, self.backoff_ms);
        Ok(AnySource::Http(source))
    }

    pub fn tree_view(&self) -> TreeView {
        let depth = if self.expand_all {
            None
        } else {
            Some(self.depth)
        };
        let mut view = TreeView::new()
            .with_depth(depth)
            .with_values(!self.hide_values);
        for path in &self.expand {
            view.toggle(path);
        }
        view
    }
}
