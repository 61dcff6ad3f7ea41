// src/bootstrap.rs

use anyhow::Result;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::fetch::LabelSource;

/// The component the bootstrap hands control to.
pub trait Application {
    type Output;

    /// Receive the raw label CSV text.
    fn load_labels(&mut self, text: String);

    /// Start the application. Consumes `self`, so it can only run once.
    fn run_app(self) -> Result<Self::Output>;
}

/// Fetch labels from `source`, feed them to `app` if the fetch succeeded, then
/// start `app`.
///
/// A failed fetch is logged and otherwise ignored: the app is started without
/// labels. Only errors from `run_app` itself are returned.
pub async fn bootstrap<S, A>(source: &S, mut app: A) -> Result<A::Output>
where
    S: LabelSource,
    A: Application,
{
    let origin = source.describe();
    let start = Instant::now();
    match source.fetch_labels().await {
        Ok(text) => {
            info!(source = %origin, bytes = text.len(), elapsed = ?start.elapsed(), "labels fetched");
            app.load_labels(text);
        }
        Err(e) => {
            let reason = format!("{e:#}");
            warn!(source = %origin, error = %reason, "label fetch failed; starting without labels");
        }
    }
    app.run_app()
}
