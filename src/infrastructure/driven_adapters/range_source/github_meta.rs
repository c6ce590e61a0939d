//! GitHub Meta API Range Source
//!
//! Fetches the trusted CIDR ranges from the GitHub meta API. The upstream
//! is treated as a black box: a fetch succeeds iff the response has an
//! HTTP success status and a decodable payload.

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use serde::Deserialize;

use crate::domain::gateways::TrustedRangeSource;
use crate::shared::errors::RangeSourceError;

/// Response shape of the GitHub meta API, reduced to the field we consume
#[derive(Debug, Deserialize)]
struct GithubMetaResponse {
    actions: Vec<String>,
}

/// Range source backed by the GitHub meta API
pub struct GithubMetaRangeSource {
    client: reqwest::Client,
    url: String,
}

impl GithubMetaRangeSource {
    /// Create a new range source fetching from the given URL
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl TrustedRangeSource for GithubMetaRangeSource {
    async fn fetch_ranges(&self) -> Result<Vec<String>, RangeSourceError> {
        // The GitHub API rejects requests without a User-Agent.
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, "lockfile-registry")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RangeSourceError::UpstreamStatus(status.as_u16()));
        }

        let body: GithubMetaResponse = response.json().await?;
        Ok(body.actions)
    }
}
