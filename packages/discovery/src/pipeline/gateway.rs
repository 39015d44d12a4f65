//! Search dispatch: query augmentation, provider invocation, hard timeout.
//!
//! The gateway owns the only deadline in the pipeline. A search that runs
//! past it fails with [`DiscoveryError::SearchTimeout`], which callers
//! must be able to tell apart from an ordinary provider failure - so the
//! timeout is enforced here, around the provider call, never inside a
//! provider's HTTP client.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{DiscoveryError, Result};
use crate::traits::{ProviderRequest, SearchDepth, SearchHit, SearchProvider};

/// Hard deadline on the provider call. Exceeding it terminates the
/// request with no partial results.
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(45);

/// Default cap on hits requested from the provider.
pub const DEFAULT_MAX_RESULTS: usize = 30;

/// Literal tokens appended to every query to bias the provider toward
/// in-language, job-shaped results.
const QUERY_HINTS: &str = "job posting hiring English";

/// Boards baked into the query itself as a `site:` OR-clause.
const SITE_CLAUSE_DOMAINS: [&str; 8] = [
    "linkedin.com",
    "indeed.com",
    "glassdoor.com",
    "rozee.pk",
    "jobee.pk",
    "glassdoor.co.uk",
    "lever.co",
    "greenhouse.io",
];

/// Domains passed to the provider as an include-list.
///
/// Curated separately from [`SITE_CLAUSE_DOMAINS`] and from the filter
/// stage's trusted list; the three overlap but are not identical, and
/// each check is applied on its own.
const PROVIDER_INCLUDE_DOMAINS: [&str; 9] = [
    "linkedin.com",
    "indeed.com",
    "glassdoor.com",
    "rozee.pk",
    "mustakbil.com",
    "jobee.pk",
    "lever.co",
    "greenhouse.io",
    "workable.com",
];

/// Issues augmented queries to the search provider under the deadline.
pub struct SearchGateway {
    provider: Arc<dyn SearchProvider>,
    max_results: usize,
}

impl SearchGateway {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            provider,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Override the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// The provider's identifier, recorded as the source of postings.
    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    /// Run the query through the provider and return raw hits.
    ///
    /// No retry on failure or timeout; both propagate as-is.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let request = ProviderRequest::new(augment_query(query))
            .with_depth(SearchDepth::Advanced)
            .with_max_results(self.max_results)
            .with_include_domains(PROVIDER_INCLUDE_DOMAINS);

        debug!("dispatching search: {}", request.query);

        let hits = match tokio::time::timeout(SEARCH_TIMEOUT, self.provider.search(&request)).await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(DiscoveryError::SearchTimeout {
                    limit: SEARCH_TIMEOUT,
                })
            }
        };

        info!("provider returned {} raw hits", hits.len());
        Ok(hits)
    }
}

/// Wrap the query with the site OR-clause and the literal hint tokens.
fn augment_query(query: &str) -> String {
    let sites = SITE_CLAUSE_DOMAINS
        .iter()
        .map(|domain| format!("site:{domain}"))
        .collect::<Vec<_>>()
        .join(" OR ");

    format!("{query} ({sites}) {QUERY_HINTS}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSearchProvider;

    #[test]
    fn augmentation_wraps_sites_and_hints() {
        let augmented = augment_query("sales jobs in Lahore");

        assert!(augmented.starts_with("sales jobs in Lahore (site:linkedin.com OR "));
        assert!(augmented.contains("site:glassdoor.co.uk OR site:lever.co"));
        assert!(augmented.ends_with(") job posting hiring English"));
    }

    #[tokio::test]
    async fn request_carries_depth_cap_and_include_domains() {
        let provider = Arc::new(MockSearchProvider::new());
        let gateway = SearchGateway::new(provider.clone());

        gateway.search("rust jobs").await.unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].depth, SearchDepth::Advanced);
        assert_eq!(requests[0].max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(requests[0].include_domains, PROVIDER_INCLUDE_DOMAINS);
        // mustakbil.com is include-list only, never part of the site clause
        assert!(!requests[0].query.contains("site:mustakbil.com"));
        assert!(requests[0].query.starts_with("rust jobs (site:"));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_times_out_with_the_distinct_error() {
        let provider = MockSearchProvider::new().with_delay(Duration::from_secs(46));
        let gateway = SearchGateway::new(Arc::new(provider));

        let err = gateway.search("rust jobs").await.unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "search timed out after 45s");
    }

    #[tokio::test(start_paused = true)]
    async fn provider_finishing_under_the_deadline_is_not_a_timeout() {
        let provider = MockSearchProvider::new()
            .with_delay(Duration::from_secs(44))
            .with_hits(vec![SearchHit::new("https://linkedin.com/jobs/1")]);
        let gateway = SearchGateway::new(Arc::new(provider));

        let hits = gateway.search("rust jobs").await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn provider_failure_is_not_reported_as_timeout() {
        let provider = MockSearchProvider::new().failing("upstream 502");
        let gateway = SearchGateway::new(Arc::new(provider));

        let err = gateway.search("rust jobs").await.unwrap_err();

        assert!(!err.is_timeout());
        assert!(err.to_string().contains("upstream 502"));
    }
}
