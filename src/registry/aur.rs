//! Lookup against the AUR RPC interface.

use crate::registry::build_client;
use crate::types::Result;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, trace};

/// Location tag reported for AUR hits.
const AUR_TAG: &str = "AUR";

/// RPC v5 info response.
#[derive(Debug, Deserialize)]
struct InfoResponse {
    resultcount: i64,
    #[serde(default)]
    results: Vec<InfoResult>,
}

#[derive(Debug, Deserialize)]
struct InfoResult {
    #[serde(rename = "Name")]
    name: String,
}

/// Checker for the AUR.
pub struct AurChecker {
    client: Client,
    base_url: String,
}

impl AurChecker {
    /// Create a checker against `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: base_url.to_string(),
        })
    }

    /// Report whether `name` resolves to exactly one AUR package.
    ///
    /// Info queries are exact, but the tag is only returned when
    /// `resultcount` is 1 and the single result's `Name` matches the
    /// query. Anything else, including a multi-result response, is a
    /// miss.
    pub async fn lookup(&self, name: &str) -> Result<Option<String>> {
        let url = format!(
            "{}?v=5&type=info&arg[]={}",
            self.base_url,
            urlencoding::encode(name)
        );
        trace!("Checking AUR: {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let data: InfoResponse = serde_json::from_str(&body)?;

        if data.resultcount == 1 && data.results.first().is_some_and(|r| r.name == name) {
            debug!("AUR hit: {}", name);
            return Ok(Some(AUR_TAG.to_string()));
        }

        Ok(None)
    }
}
