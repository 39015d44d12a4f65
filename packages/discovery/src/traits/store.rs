//! Storage traits for profiles and discovered jobs.
//!
//! Two separate traits rather than one, because the pipeline's needs are
//! asymmetric: profiles are read-only lookups, while jobs are
//! write-mostly with a url-dedup check in front. A single backend (like
//! `MemoryStore` or `PostgresStore`) typically implements both.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{JobPosting, Profile, StoredJob};

/// Read-only access to candidate profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Look up a profile by exact email address.
    ///
    /// `Ok(None)` means the email is unknown. Errors indicate the store
    /// itself failed; callers that can degrade gracefully should treat an
    /// error the same as a miss.
    async fn get_by_email(&self, email: &str) -> Result<Option<Profile>>;
}

/// Persistence for discovered job postings.
///
/// The url is the dedup key. `exists_by_url` and `insert` are separate
/// calls, so two concurrent runs can race between them; the pipeline
/// tolerates the resulting duplicate rather than serializing runs.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Whether a posting with this exact url has already been stored.
    async fn exists_by_url(&self, url: &str) -> Result<bool>;

    /// Persist a posting along with the query that found it.
    ///
    /// The store assigns the id and creation timestamp.
    async fn insert(&self, posting: &JobPosting, search_query: &str) -> Result<StoredJob>;

    /// The most recently stored jobs, newest first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<StoredJob>>;
}
