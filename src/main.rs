use anyhow::Result;
use clap::Parser;
use prcview::{
    app::App,
    bootstrap,
    config::Config,
    logging,
    param::{self, ParamExt},
};
use std::io::{self, BufWriter};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) parse args & init logging ───────────────────────────────
    let config = Config::parse();
    logging::init();
    logging::set_panic_hook();
    info!("startup");

    // ─── 2) decode the param file ───────────────────────────────────
    let root = param::read_file(&config.param_file)?;
    info!(entries = root.children_len().unwrap_or(0), "loaded {}", config.param_file.display());

    // ─── 3) fetch labels, then hand over to the viewer ──────────────
    let source = config.label_source()?;
    let stdout = BufWriter::new(io::stdout().lock());
    let app = App::new(root, config.tree_view(), config.format, stdout);
    bootstrap(&source, app).await?;

    info!("all done");
    Ok(())
}
