// src/fetch/http.rs

use anyhow::{bail, Context, Result};
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};
use url::Url;

use super::LabelSource;

/// Fetches labels with a single `GET`, optionally retried with exponential backoff.
#[derive(Debug, Clone)]
pub struct HttpLabelSource {
    client: Client,
    url: Url,
    max_retries: u32,
    initial_backoff_ms: u64,
}

impl HttpLabelSource {
    pub fn new(client: Client, url: &str) -> Result<Self> {
        let url = Url::parse(url).with_context(|| format!("parsing labels URL {}", url))?;
        Ok(Self {
            client,
            url,
            max_retries: 0,
            initial_backoff_ms: 500,
        })
    }

    /// Build a client with the given request timeout (`None` waits forever).
    pub fn with_timeout(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("building HTTP client")?;
        Self::new(client, url)
    }

    pub fn retries(mut self, max_retries: u32, initial_backoff_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.initial_backoff_ms = initial_backoff_ms;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl HttpLabelSource {
    /// Delay before retry number `attempt` (1-based): the initial backoff,
    /// doubled for each earlier retry.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt.saturating_sub(1)).unwrap_or(u64::MAX);
        Duration::from_millis(self.initial_backoff_ms.saturating_mul(factor))
    }

    async fn fetch_once(&self) -> Result<String> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .context("sending label request")?;
        let status = response.status();
        if !status.is_success() {
            bail!("label server answered {}", status);
        }
        response.text().await.context("reading label response body")
    }
}

impl LabelSource for HttpLabelSource {
    #[instrument(level = "info", skip(self), fields(url = %self.url))]
    async fn fetch_labels(&self) -> Result<String> {
        let mut attempt = 0;
        let text = loop {
            match self.fetch_once().await {
                Ok(text) => break text,
                Err(e) if attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.backoff_delay(attempt);
                    warn!(attempt, ?delay, error = %e, "label fetch failed, retrying");
                    sleep(delay).await;
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("fetching {} ({} attempts)", self.url, attempt + 1)
                    })
                }
            }
        };
        debug!(bytes = text.len(), attempts = attempt + 1, "fetched labels");
        Ok(text)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
