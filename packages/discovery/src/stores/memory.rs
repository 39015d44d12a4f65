//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::traits::store::{JobStore, ProfileStore};
use crate::types::{JobPosting, Profile, StoredJob};

/// In-memory store for profiles and jobs.
///
/// Useful for testing and development. Not suitable for production
/// as data is lost on restart. Jobs are held in insertion order, which
/// is also creation order, so recent reads are just a reverse walk.
pub struct MemoryStore {
    profiles: RwLock<HashMap<String, Profile>>,
    jobs: RwLock<Vec<StoredJob>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            jobs: RwLock::new(Vec::new()),
        }
    }

    /// Seed a profile, replacing any existing one with the same email.
    pub fn add_profile(&self, profile: Profile) {
        self.profiles
            .write()
            .unwrap()
            .insert(profile.email.clone(), profile);
    }

    /// Builder-style profile seeding.
    pub fn with_profile(self, profile: Profile) -> Self {
        self.add_profile(profile);
        self
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.profiles.write().unwrap().clear();
        self.jobs.write().unwrap().clear();
    }

    /// Number of stored jobs, duplicates included.
    pub fn job_count(&self) -> usize {
        self.jobs.read().unwrap().len()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get_by_email(&self, email: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.read().unwrap().get(email).cloned())
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn exists_by_url(&self, url: &str) -> Result<bool> {
        Ok(self
            .jobs
            .read()
            .unwrap()
            .iter()
            .any(|job| job.posting.url == url))
    }

    async fn insert(&self, posting: &JobPosting, search_query: &str) -> Result<StoredJob> {
        let stored = StoredJob {
            id: Uuid::new_v4(),
            posting: posting.clone(),
            search_query: search_query.to_string(),
            created_at: Utc::now(),
        };

        self.jobs.write().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<StoredJob>> {
        Ok(self
            .jobs
            .read()
            .unwrap()
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(url: &str) -> JobPosting {
        JobPosting::new("role", url, "tavily")
    }

    #[tokio::test]
    async fn profiles_round_trip_by_email() {
        let store = MemoryStore::new()
            .with_profile(Profile::new("jane@x.com").with_skills(["Sales"]));

        let found = store.get_by_email("jane@x.com").await.unwrap();
        assert_eq!(found.unwrap().skills, vec!["Sales"]);

        let missing = store.get_by_email("other@x.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn exists_by_url_sees_inserted_jobs() {
        let store = MemoryStore::new();
        assert!(!store.exists_by_url("https://a.dev/1").await.unwrap());

        store.insert(&posting("https://a.dev/1"), "q").await.unwrap();
        assert!(store.exists_by_url("https://a.dev/1").await.unwrap());
    }

    #[tokio::test]
    async fn insert_does_not_enforce_uniqueness() {
        // Dedup lives in the pipeline's check-then-insert sequence, not
        // in the store.
        let store = MemoryStore::new();
        store.insert(&posting("https://a.dev/1"), "q").await.unwrap();
        store.insert(&posting("https://a.dev/1"), "q").await.unwrap();

        assert_eq!(store.job_count(), 2);
    }

    #[tokio::test]
    async fn list_recent_is_newest_first_and_capped() {
        let store = MemoryStore::new();
        for i in 0..4 {
            store
                .insert(&posting(&format!("https://a.dev/{i}")), "q")
                .await
                .unwrap();
        }

        let recent = store.list_recent(2).await.unwrap();

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].posting.url, "https://a.dev/3");
        assert_eq!(recent[1].posting.url, "https://a.dev/2");
    }
}
