//! Search provider trait for external job discovery.
//!
//! The pipeline never talks to a search API directly: it builds a
//! [`ProviderRequest`] and hands it to whatever [`SearchProvider`] it was
//! constructed with. This keeps the gating, filtering, and ranking stages
//! provider-agnostic and makes the whole pipeline testable without a
//! network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Search thoroughness requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    Advanced,
}

impl SearchDepth {
    /// Wire value, e.g. `"advanced"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchDepth::Basic => "basic",
            SearchDepth::Advanced => "advanced",
        }
    }
}

/// A fully-specified search request.
///
/// The gateway builds these; providers translate them to their own wire
/// format. `include_domains` is advisory - providers that cannot restrict
/// by domain may ignore it, which is why the filter stage re-checks
/// domains on the way back.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    /// The augmented query string.
    pub query: String,

    pub depth: SearchDepth,

    /// Upper bound on returned hits.
    pub max_results: usize,

    /// Domains the provider should restrict itself to, when supported.
    pub include_domains: Vec<String>,
}

impl ProviderRequest {
    /// Create a basic-depth request with a default result cap.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            depth: SearchDepth::Basic,
            max_results: 10,
            include_domains: Vec::new(),
        }
    }

    /// Set the search depth.
    pub fn with_depth(mut self, depth: SearchDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Set the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Restrict the search to the given domains.
    pub fn with_include_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_domains = domains.into_iter().map(Into::into).collect();
        self
    }
}

/// A raw hit as returned by a provider, before any filtering.
///
/// Providers map missing fields to empty strings rather than dropping the
/// hit; the filter stage decides what is usable. In particular an empty
/// `url` is allowed here and rejected there.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    pub content: String,
}

impl SearchHit {
    /// Create a hit with empty title and content.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            content: String::new(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the content snippet.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// External search provider.
///
/// # Implementations
///
/// - `TavilySearch` - Tavily API
/// - `MockSearchProvider` - for testing (see `testing`)
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Stable identifier recorded as the `source` of every posting this
    /// provider produces, e.g. `"tavily"`.
    fn id(&self) -> &'static str;

    /// Execute the request and return raw hits.
    ///
    /// Implementations should surface transport and API errors as
    /// [`DiscoveryError::SearchProvider`](crate::error::DiscoveryError);
    /// the caller owns the overall time budget.
    async fn search(&self, request: &ProviderRequest) -> Result<Vec<SearchHit>>;
}
