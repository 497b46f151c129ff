use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::consts::{ENDPOINT_URL, REQUEST_TIMEOUT};
use crate::payload::Payload;

use super::{Reply, Transport};

/// reqwest-backed transport. Accepts any server certificate.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Transport aimed at the fixed endpoint with the fixed timeout.
    pub fn new() -> Result<Self> {
        Self::with_target(ENDPOINT_URL, REQUEST_TIMEOUT)
    }

    pub fn with_target(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        // The endpoint serves a self-signed certificate.
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, payload: &Payload) -> Result<Reply> {
        debug!(url = %self.url, "sending POST");

        let resp = self
            .client
            .post(&self.url)
            .header("content-type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| self.describe(e))?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| self.describe(e))?;
        debug!(status, bytes = body.len(), "response received");

        Ok(Reply { status, body })
    }

    fn target(&self) -> &str {
        &self.url
    }
}

impl HttpTransport {
    fn describe(&self, err: reqwest::Error) -> anyhow::Error {
        warn!(url = %self.url, error = %err, "request failed");
        if err.is_timeout() {
            let secs = self.timeout.as_secs_f64();
            anyhow::Error::new(err).context(format!("request timed out after {secs}s"))
        } else {
            anyhow::Error::new(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_endpoint() {
        let transport = HttpTransport::new().unwrap();
        assert_eq!(transport.target(), ENDPOINT_URL);
        assert_eq!(transport.timeout, REQUEST_TIMEOUT);
    }

    #[test]
    fn with_target_overrides_url() {
        let transport =
            HttpTransport::with_target("http://127.0.0.1:1/x", Duration::from_millis(50)).unwrap();
        assert_eq!(transport.target(), "http://127.0.0.1:1/x");
    }
}
