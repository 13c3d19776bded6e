use serde::Deserialize;
use tokio::runtime::Runtime;
use tracing::debug;

/// Top search result for a query: a body snippet and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub snippet: String,
    pub url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("search backend returned {status}: {body}")]
    Backend { status: u16, body: String },
    #[error("search runtime unavailable: {0}")]
    Runtime(String),
}

/// Full-text search collaborator with top-result-for-query semantics.
/// The matcher treats every failure as "no match for this candidate".
pub trait SearchGateway: Send + Sync {
    fn top_result(&self, query: &str) -> Result<Option<SearchHit>, SearchError>;
}

/// Client for a SearxNG-compatible JSON search endpoint.
///
/// Wraps the async reqwest client behind an owned runtime so the
/// sequential matcher loop can stay synchronous without exposing async
/// details to callers.
pub struct HttpSearchClient {
    client: reqwest::Client,
    runtime: Runtime,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    url: String,
    #[serde(default)]
    content: String,
}

impl HttpSearchClient {
    /// `base_url` should be like `http://localhost:8888` (no trailing
    /// slash).
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        let runtime = Runtime::new().map_err(|err| SearchError::Runtime(err.to_string()))?;
        Ok(Self::with_runtime(base_url, runtime))
    }

    pub fn with_runtime(base_url: &str, runtime: Runtime) -> Self {
        Self {
            client: reqwest::Client::new(),
            runtime,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl std::fmt::Debug for HttpSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSearchClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl SearchGateway for HttpSearchClient {
    fn top_result(&self, query: &str) -> Result<Option<SearchHit>, SearchError> {
        let url = format!("{}/search", self.base_url);
        debug!(%query, "querying search collaborator");

        let response = self.runtime.block_on(
            self.client
                .get(&url)
                .query(&[("q", query), ("format", "json")])
                .send(),
        )?;

        let status = response.status();
        if !status.is_success() {
            let body = self
                .runtime
                .block_on(response.text())
                .unwrap_or_default();
            return Err(SearchError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = self.runtime.block_on(response.json())?;
        Ok(parsed.results.into_iter().next().map(|result| SearchHit {
            snippet: result.content,
            url: result.url,
        }))
    }
}
