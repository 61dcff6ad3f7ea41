// src/param/read.rs

use anyhow::{Context, Result};
use std::{io::Cursor, path::Path};
use tracing::{debug, instrument};

use super::{layout::check_layout, ParamKind};

/// Read and decode a param file from disk. Returns the root struct.
#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<ParamKind> {
    let bytes = std::fs::read(&path)
        .with_context(|| format!("reading param file {:?}", path.as_ref()))?;
    read_bytes(&bytes).with_context(|| format!("decoding param file {:?}", path.as_ref()))
}

/// Check the offset layout of an in-memory param file, then decode it.
pub fn read_bytes(data: &[u8]) -> Result<ParamKind> {
    let nodes = check_layout(data).context("checking param layout")?;
    let root = prc::read_stream(&mut Cursor::new(data)).context("decoding params")?;
    debug!(nodes, bytes = data.len(), "decoded param file");
    Ok(ParamKind::Struct(root))
}
