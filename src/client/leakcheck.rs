use crate::config::Config;
use crate::model::LeakResult;
use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, warn};

/// Query-string parameter carrying the lookup value.
const QUERY_PARAM: &str = "check";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// The request URL carries the user's query, so it is dropped from transport errors.
impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Transport(e.without_url())
    }
}

/// HTTP client for the breach-lookup API.
///
/// One GET per lookup, no retries. The request timeout comes from [`Config`].
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    base_url: Url,
}

impl LookupClient {
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(LookupError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.api_base_url().clone(),
        })
    }

    /// Full request URL for `query`, with the value percent-encoded.
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair(QUERY_PARAM, query);
        url
    }

    async fn try_fetch(&self, query: &str) -> Result<LeakResult, LookupError> {
        let url = self.request_url(query);
        debug!(host = url.host_str().unwrap_or_default(), "sending lookup request");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let payload: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(LeakResult::from_json(payload))
    }
}

#[async_trait]
impl super::LeakLookup for LookupClient {
    fn name(&self) -> &'static str {
        "LeakCheck API"
    }

    async fn fetch(&self, normalized_query: &str) -> LeakResult {
        match self.try_fetch(normalized_query).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "lookup failed");
                LeakResult::failed(e.to_string())
            }
        }
    }
}
