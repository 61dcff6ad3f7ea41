// src/app.rs

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;
use tracing::{debug, info};

use crate::{
    bootstrap::Application,
    param::{ParamKind, Serialized},
    tree::TreeView,
};

/// How `run_app` presents the param tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Tree,
    Json,
    Yaml,
}

/// The param viewer: a decoded param tree rendered to a writer.
pub struct App<W: Write> {
    root: ParamKind,
    view: TreeView,
    format: OutputFormat,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(root: ParamKind, view: TreeView, format: OutputFormat, out: W) -> Self {
        Self {
            root,
            view,
            format,
            out,
        }
    }
}

impl<W: Write> Application for App<W> {
    type Output = W;

    fn load_labels(&mut self, text: String) {
        let count = crate::load_labels(&text);
        info!(labels = count, "installed labels");
    }

    fn run_app(mut self) -> Result<W> {
        debug!(format = ?self.format, "rendering param tree");
        match self.format {
            OutputFormat::Tree => self
                .view
                .render(&self.root, &mut self.out)
                .context("writing param tree")?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, &Serialized(&self.root))
                    .context("writing param tree as JSON")?;
                writeln!(self.out)?;
            }
            OutputFormat::Yaml => serde_yaml::to_writer(&mut self.out, &Serialized(&self.root))
                .context("writing param tree as YAML")?,
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
