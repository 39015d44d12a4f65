//! Dedup persistence of ranked postings.
//!
//! Each posting is checked and inserted individually, and each gets an
//! explicit per-item outcome instead of a swallowed exception: a failure
//! on one posting never aborts the batch, and the caller can see exactly
//! how the batch went.

use serde::Serialize;
use tracing::{info, warn};

use crate::traits::JobStore;
use crate::types::JobPosting;

/// What happened to a single posting during persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// New row written.
    Inserted,
    /// A row with this url already exists; nothing written.
    Duplicate,
    /// Existence check or insert failed; logged and skipped.
    Failed,
}

/// Aggregated result of persisting one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreOutcome {
    pub inserted: usize,
    pub duplicates: usize,
    pub failed: usize,
}

impl StoreOutcome {
    /// Count of new rows written, the batch's headline number.
    pub fn stored_count(&self) -> usize {
        self.inserted
    }

    fn record(&mut self, outcome: InsertOutcome) {
        match outcome {
            InsertOutcome::Inserted => self.inserted += 1,
            InsertOutcome::Duplicate => self.duplicates += 1,
            InsertOutcome::Failed => self.failed += 1,
        }
    }
}

/// Persist postings whose urls are not already stored.
///
/// `search_query` is recorded on every inserted row. The existence check
/// and the insert are two separate store calls, so a concurrent batch can
/// slip a duplicate in between them; see `JobStore` for why that is
/// tolerated.
pub async fn store_new(
    store: &dyn JobStore,
    jobs: &[JobPosting],
    search_query: &str,
) -> StoreOutcome {
    let mut outcome = StoreOutcome::default();

    for job in jobs {
        outcome.record(store_one(store, job, search_query).await);
    }

    info!(
        "stored {} new jobs ({} duplicates, {} failed)",
        outcome.inserted, outcome.duplicates, outcome.failed
    );
    outcome
}

async fn store_one(store: &dyn JobStore, job: &JobPosting, search_query: &str) -> InsertOutcome {
    match store.exists_by_url(&job.url).await {
        Ok(true) => return InsertOutcome::Duplicate,
        Ok(false) => {}
        Err(e) => {
            warn!("existence check failed for {}: {}", job.url, e);
            return InsertOutcome::Failed;
        }
    }

    match store.insert(job, search_query).await {
        Ok(_) => InsertOutcome::Inserted,
        Err(e) => {
            warn!("failed to store job {}: {}", job.url, e);
            InsertOutcome::Failed
        }
    }
}
