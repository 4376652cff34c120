use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::{debug, error};

use crate::data::alert::AlertRow;

/// One fetch result plus the bookkeeping an interactive front-end needs
/// to discard responses that resolve out of order: `seq` increases
/// monotonically per request, so a caller may drop any result older than
/// the one it is displaying.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub rows: Vec<AlertRow>,
    pub fetched_at: DateTime<Local>,
    pub seq: u64,
}

impl FetchResult {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            fetched_at: Local::now(),
            seq: 0,
        }
    }
}

pub struct AlertsClient {
    base_url: String,
    client: reqwest::blocking::Client,
    next_seq: u64,
}

impl AlertsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
            next_seq: 0,
        }
    }

    /// Query the alerts endpoint with the pairs from the query builder.
    ///
    /// A JSON array maps to rows. A successful response that is not an
    /// array is the backend's error shape: it is logged and treated as an
    /// empty result set. Transport and HTTP errors propagate to the
    /// caller, which logs and shows an empty grid; nothing is retried.
    pub fn fetch_alerts(&mut self, params: &[(String, String)]) -> Result<FetchResult> {
        let url = format!("{}/api/alerts", self.base_url);
        debug!(target: "api", "GET {} with {} params", url, params.len());

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .context("alerts request failed")?;

        if !response.status().is_success() {
            anyhow::bail!("alerts request returned {}", response.status());
        }

        let payload: Value = response
            .json()
            .context("alerts response was not valid JSON")?;

        let rows = match &payload {
            Value::Array(items) => items.iter().map(AlertRow::from_json).collect(),
            other => {
                error!(target: "api", "alerts endpoint returned a non-array payload: {}", other);
                Vec::new()
            }
        };

        self.next_seq += 1;
        debug!(target: "api", "fetch #{} returned {} rows", self.next_seq, rows.len());

        Ok(FetchResult {
            rows,
            fetched_at: Local::now(),
            seq: self.next_seq,
        })
    }
}
