//! The discovery pipeline - main entry point for the library.
//!
//! One call runs the whole chain: plan the query, search under the
//! deadline, gate and structure the hits, rank by location affinity,
//! persist the new ones, assemble the response.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use discovery::{Discovery, MemoryStore, OpenAiGenerator, TavilySearch};
//!
//! let store = Arc::new(MemoryStore::new());
//! let discovery = Discovery::new(
//!     Arc::new(TavilySearch::from_env()?),
//!     Arc::new(OpenAiGenerator::from_env()?),
//!     store.clone(),
//!     store,
//! );
//!
//! let response = discovery.run("sales jobs in Lahore").await?;
//! println!("{} jobs for '{}'", response.count, response.query);
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{DiscoveryError, Result};
use crate::pipeline::{filter, persist, rank};
use crate::pipeline::{gateway::SearchGateway, planner::QueryPlanner};
use crate::traits::{JobStore, ProfileStore, QueryGenerator, SearchProvider};
use crate::types::{SearchResponse, StoredJob};

/// Shortest accepted query, counted after trimming.
const MIN_QUERY_CHARS: usize = 3;

/// Most jobs a recent-jobs read will return.
const MAX_RECENT_JOBS: usize = 100;

/// Job discovery over pluggable collaborators.
pub struct Discovery {
    planner: QueryPlanner,
    gateway: SearchGateway,
    jobs: Arc<dyn JobStore>,
}

impl Discovery {
    /// Wire up a pipeline from its four collaborators.
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        generator: Arc<dyn QueryGenerator>,
        profiles: Arc<dyn ProfileStore>,
        jobs: Arc<dyn JobStore>,
    ) -> Self {
        Self {
            planner: QueryPlanner::new(profiles, generator),
            gateway: SearchGateway::new(provider),
            jobs,
        }
    }

    /// Run one discovery request end to end.
    ///
    /// `raw_query` is either free keywords or an email address. Returns
    /// ranked jobs; new ones are persisted along the way. Fails only on
    /// invalid input, search timeout, or provider failure - everything
    /// else degrades.
    pub async fn run(&self, raw_query: &str) -> Result<SearchResponse> {
        if raw_query.trim().chars().count() < MIN_QUERY_CHARS {
            return Err(DiscoveryError::InvalidQuery {
                reason: format!("query must be at least {MIN_QUERY_CHARS} characters"),
            });
        }

        let planned = self.planner.plan(raw_query).await;
        info!("searching: {}", planned.query);

        let hits = self.gateway.search(&planned.query).await?;
        let raw_count = hits.len();

        let postings = filter::filter_hits(hits, self.gateway.provider_id());
        info!(
            "filtered {} raw hits down to {} job postings",
            raw_count,
            postings.len()
        );

        let ranked = rank::rank(postings, planned.user_location.as_deref());

        let outcome = persist::store_new(self.jobs.as_ref(), &ranked, &planned.query).await;
        debug!("persistence outcome: {:?}", outcome);

        Ok(SearchResponse::from_ranked(planned.query, &ranked))
    }

    /// Most recently stored jobs, newest first.
    ///
    /// `limit` is clamped to 1..=100.
    pub async fn recent_jobs(&self, limit: usize) -> Result<Vec<StoredJob>> {
        let limit = limit.clamp(1, MAX_RECENT_JOBS);
        self.jobs.list_recent(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryStore;
    use crate::testing::{MockQueryGenerator, MockSearchProvider};

    fn discovery_with(provider: MockSearchProvider) -> (Discovery, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let discovery = Discovery::new(
            Arc::new(provider),
            Arc::new(MockQueryGenerator::new()),
            store.clone(),
            store.clone(),
        );
        (discovery, store)
    }

    #[tokio::test]
    async fn short_queries_are_rejected_before_any_planning() {
        let provider = MockSearchProvider::new();
        let (discovery, _) = discovery_with(provider);

        let err = discovery.run("  ab  ").await.unwrap_err();

        assert!(matches!(err, DiscoveryError::InvalidQuery { .. }));
    }

    #[tokio::test]
    async fn three_character_queries_are_accepted() {
        let (discovery, _) = discovery_with(MockSearchProvider::new());

        let response = discovery.run("sdr").await.unwrap();

        assert!(response.success);
        assert_eq!(response.query, "sdr");
        assert_eq!(response.count, 0);
    }

    #[tokio::test]
    async fn recent_jobs_limit_is_clamped() {
        let (discovery, store) = discovery_with(MockSearchProvider::new());
        for i in 0..5 {
            let posting =
                crate::types::JobPosting::new("role", format!("https://a.dev/{i}"), "tavily");
            store.insert(&posting, "q").await.unwrap();
        }

        // 0 clamps up to 1
        assert_eq!(discovery.recent_jobs(0).await.unwrap().len(), 1);
        // 1000 clamps down to 100, which still returns all 5
        assert_eq!(discovery.recent_jobs(1000).await.unwrap().len(), 5);
    }
}
