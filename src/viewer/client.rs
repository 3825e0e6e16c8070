use anyhow::{anyhow, bail, Context};

use super::snapshot::Snapshot;

/// Read-only client for the simulation's state endpoint. One `GET`, no body,
/// no auth; anything but a 2xx with a decodable snapshot is an error the
/// poll loop turns into backoff.
#[derive(Debug, Clone)]
pub struct SnapshotClient {
    http: reqwest::Client,
    url: String,
}

impl SnapshotClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> anyhow::Result<Snapshot> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("snapshot request failed for {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("snapshot endpoint returned {}", status.as_u16());
        }

        response
            .json::<Snapshot>()
            .await
            .map_err(|error| anyhow!("failed to decode snapshot: {error}"))
    }
}
