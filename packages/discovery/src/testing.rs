//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the discovery
//! library without making real search, LLM, or database calls. Each mock
//! is configured with builders and tracks the calls made to it.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{DiscoveryError, Result};
use crate::stores::MemoryStore;
use crate::traits::{
    generator::QueryGenerator,
    searcher::{ProviderRequest, SearchHit, SearchProvider},
    store::{JobStore, ProfileStore},
};
use crate::types::{JobPosting, Profile, StoredJob};

/// A mock search provider with canned hits.
///
/// Records every request it receives, can fail on demand, and can delay
/// its reply to exercise the gateway deadline (pair with a paused tokio
/// clock so the delay costs no wall time).
#[derive(Default)]
pub struct MockSearchProvider {
    hits: Arc<RwLock<Vec<SearchHit>>>,
    failure: Option<String>,
    delay: Option<Duration>,
    id: Option<&'static str>,
    requests: Arc<RwLock<Vec<ProviderRequest>>>,
}

impl MockSearchProvider {
    /// Create a mock that returns no hits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hits every search returns.
    pub fn with_hits(self, hits: Vec<SearchHit>) -> Self {
        *self.hits.write().unwrap() = hits;
        self
    }

    /// Append a single hit.
    pub fn with_hit(self, hit: SearchHit) -> Self {
        self.hits.write().unwrap().push(hit);
        self
    }

    /// Make every search fail with the given message.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Delay every search by the given duration before replying.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Override the provider identifier (default `"mock"`).
    pub fn with_id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    /// All requests this mock has received.
    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.read().unwrap().clone()
    }

    /// Number of searches made.
    pub fn call_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    fn id(&self) -> &'static str {
        self.id.unwrap_or("mock")
    }

    async fn search(&self, request: &ProviderRequest) -> Result<Vec<SearchHit>> {
        self.requests.write().unwrap().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = &self.failure {
            return Err(DiscoveryError::SearchProvider(message.clone().into()));
        }

        Ok(self.hits.read().unwrap().clone())
    }
}

/// A mock query generator with a canned reply.
#[derive(Default)]
pub struct MockQueryGenerator {
    reply: Arc<RwLock<String>>,
    fail: bool,
    seen: Arc<RwLock<Vec<String>>>,
}

impl MockQueryGenerator {
    /// Create a mock replying with `"mock query"`.
    pub fn new() -> Self {
        Self {
            reply: Arc::new(RwLock::new("mock query".to_string())),
            ..Default::default()
        }
    }

    /// Set the reply for every generation call.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        *self.reply.write().unwrap() = reply.into();
        self
    }

    /// Make every generation call fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Emails of the profiles this mock has been asked about.
    pub fn seen_profiles(&self) -> Vec<String> {
        self.seen.read().unwrap().clone()
    }
}

#[async_trait]
impl QueryGenerator for MockQueryGenerator {
    async fn generate_query(&self, profile: &Profile) -> Result<String> {
        self.seen.write().unwrap().push(profile.email.clone());

        if self.fail {
            return Err(DiscoveryError::QuerySynthesis(
                "mock generator failure".to_string().into(),
            ));
        }

        Ok(self.reply.read().unwrap().clone())
    }
}

/// A mock profile store that can be switched to fail every lookup.
#[derive(Default)]
pub struct MockProfileStore {
    profiles: Arc<RwLock<HashMap<String, Profile>>>,
    fail: bool,
}

impl MockProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a profile.
    pub fn with_profile(self, profile: Profile) -> Self {
        self.profiles
            .write()
            .unwrap()
            .insert(profile.email.clone(), profile);
        self
    }

    /// Make every lookup fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn get_by_email(&self, email: &str) -> Result<Option<Profile>> {
        if self.fail {
            return Err(DiscoveryError::Storage(
                "mock profile store failure".to_string().into(),
            ));
        }
        Ok(self.profiles.read().unwrap().get(email).cloned())
    }
}

/// A job store that fails on demand, wrapping a [`MemoryStore`].
///
/// Inserts fail for configured urls; existence checks can be made to
/// fail wholesale. Everything else behaves like the inner store.
#[derive(Default)]
pub struct UnreliableJobStore {
    inner: MemoryStore,
    failing_urls: Arc<RwLock<HashSet<String>>>,
    fail_existence_checks: bool,
}

impl UnreliableJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail inserts for this url.
    pub fn failing_url(self, url: impl Into<String>) -> Self {
        self.failing_urls.write().unwrap().insert(url.into());
        self
    }

    /// Fail every existence check.
    pub fn failing_existence_checks(mut self) -> Self {
        self.fail_existence_checks = true;
        self
    }
}

#[async_trait]
impl JobStore for UnreliableJobStore {
    async fn exists_by_url(&self, url: &str) -> Result<bool> {
        if self.fail_existence_checks {
            return Err(DiscoveryError::Storage(
                "injected existence check failure".to_string().into(),
            ));
        }
        self.inner.exists_by_url(url).await
    }

    async fn insert(&self, posting: &JobPosting, search_query: &str) -> Result<StoredJob> {
        if self.failing_urls.read().unwrap().contains(&posting.url) {
            return Err(DiscoveryError::Storage(
                "injected insert failure".to_string().into(),
            ));
        }
        self.inner.insert(posting, search_query).await
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<StoredJob>> {
        self.inner.list_recent(limit).await
    }
}
