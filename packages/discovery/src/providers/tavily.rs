//! Tavily-backed search provider.
//!
//! Translates a [`ProviderRequest`] into Tavily's search API and maps the
//! response back to [`SearchHit`]s, preserving provider order.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{DiscoveryError, Result};
use crate::security::SecretString;
use crate::traits::searcher::{ProviderRequest, SearchHit, SearchProvider};

const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";

/// Environment variable holding the Tavily API key.
pub const TAVILY_API_KEY_VAR: &str = "TAVILY_API_KEY";

/// Tavily search request.
#[derive(Debug, Serialize)]
struct TavilyRequest {
    query: String,
    search_depth: String,
    include_domains: Vec<String>,
    max_results: usize,
}

/// Tavily search response.
#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

/// A single Tavily search result.
///
/// Every field defaults to empty: Tavily omits fields it has no value
/// for, and downstream filtering treats empty strings as absent.
#[derive(Debug, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

/// Search provider backed by the Tavily API.
pub struct TavilySearch {
    client: reqwest::Client,
    api_key: SecretString,
}

impl TavilySearch {
    /// Create a provider with the given API key.
    ///
    /// The HTTP client deliberately carries no request timeout: the
    /// gateway owns the overall deadline, and a client-side timeout here
    /// would surface as a generic provider failure instead.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: SecretString::new(api_key),
        }
    }

    /// Create a provider from `TAVILY_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(TAVILY_API_KEY_VAR).map_err(|_| {
            DiscoveryError::Config(format!("{TAVILY_API_KEY_VAR} is not set").into())
        })?;
        Ok(Self::new(api_key))
    }
}

#[async_trait]
impl SearchProvider for TavilySearch {
    fn id(&self) -> &'static str {
        "tavily"
    }

    async fn search(&self, request: &ProviderRequest) -> Result<Vec<SearchHit>> {
        let body = TavilyRequest {
            query: request.query.clone(),
            search_depth: request.depth.as_str().to_string(),
            include_domains: request.include_domains.clone(),
            max_results: request.max_results,
        };

        let response = self
            .client
            .post(TAVILY_ENDPOINT)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .json(&body)
            .send()
            .await
            .map_err(|e| DiscoveryError::SearchProvider(Box::new(e)))?;

        if !response.status().is_success() {
            return Err(DiscoveryError::SearchProvider(Box::new(
                std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Tavily API error: {}", response.status()),
                ),
            )));
        }

        let tavily_response: TavilyResponse = response
            .json()
            .await
            .map_err(|e| DiscoveryError::SearchProvider(Box::new(e)))?;

        Ok(tavily_response
            .results
            .into_iter()
            .map(|r| {
                SearchHit::new(r.url)
                    .with_title(r.title)
                    .with_content(r.content)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::searcher::SearchDepth;

    #[test]
    fn response_tolerates_missing_fields() {
        let raw = r#"{"results": [{"url": "https://linkedin.com/jobs/1"}, {}]}"#;
        let parsed: TavilyResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].url, "https://linkedin.com/jobs/1");
        assert_eq!(parsed.results[0].title, "");
        assert_eq!(parsed.results[1].url, "");
    }

    #[test]
    fn request_serializes_wire_field_names() {
        let body = TavilyRequest {
            query: "rust jobs".to_string(),
            search_depth: SearchDepth::Advanced.as_str().to_string(),
            include_domains: vec!["linkedin.com".to_string()],
            max_results: 30,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["search_depth"], "advanced");
        assert_eq!(value["max_results"], 30);
        assert_eq!(value["include_domains"][0], "linkedin.com");
    }

    // Requires a real Tavily API key.
    #[tokio::test]
    #[ignore]
    async fn live_search() {
        let provider = TavilySearch::from_env().unwrap();
        let request = ProviderRequest::new("rust developer jobs")
            .with_depth(SearchDepth::Advanced)
            .with_max_results(5);

        let hits = provider.search(&request).await.unwrap();
        assert!(!hits.is_empty());
    }
}
