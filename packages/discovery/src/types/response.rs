use serde::{Deserialize, Serialize};

use super::job::JobPosting;

/// A single job as presented to the caller.
///
/// A projection of [`JobPosting`] with the location flattened to its
/// display label; persistence-only fields never appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    pub title: String,
    pub company: Option<String>,
    pub url: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl From<&JobPosting> for JobResult {
    fn from(posting: &JobPosting) -> Self {
        Self {
            title: posting.title.clone(),
            company: posting.company.clone(),
            url: posting.url.clone(),
            location: posting.location.map(|loc| loc.label().to_string()),
            description: posting.description.clone(),
        }
    }
}

/// The assembled result of one discovery run.
///
/// `count` always equals `jobs.len()`, and `jobs` preserves ranked order.
/// `query` echoes the exact string sent to the provider (before site
/// augmentation) so callers can see what was searched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub count: usize,
    pub jobs: Vec<JobResult>,
}

impl SearchResponse {
    /// Assemble a successful response from ranked postings.
    pub fn from_ranked(query: impl Into<String>, ranked: &[JobPosting]) -> Self {
        let jobs: Vec<JobResult> = ranked.iter().map(JobResult::from).collect();
        Self {
            success: true,
            query: query.into(),
            count: jobs.len(),
            jobs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::job::JobLocation;

    #[test]
    fn count_matches_jobs_and_order_is_preserved() {
        let ranked = vec![
            JobPosting::new("Remote Rust Engineer", "https://a.dev/1", "tavily")
                .with_location(JobLocation::Remote),
            JobPosting::new("Data Analyst", "https://a.dev/2", "tavily"),
        ];

        let response = SearchResponse::from_ranked("rust jobs", &ranked);

        assert!(response.success);
        assert_eq!(response.count, 2);
        assert_eq!(response.jobs.len(), 2);
        assert_eq!(response.jobs[0].url, "https://a.dev/1");
        assert_eq!(response.jobs[0].location.as_deref(), Some("Remote"));
        assert_eq!(response.jobs[1].location, None);
    }
}
