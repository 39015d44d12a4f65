//! Job posting types - the unit of discovery and persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Location inferred from posting content.
///
/// A closed set: the extractor only ever produces one of these values (or
/// nothing). The enum serializes as its canonical label, which is also what
/// the ranker compares against the user's free-text location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobLocation {
    Remote,
    Hybrid,
    Islamabad,
    Lahore,
    Karachi,
}

impl JobLocation {
    /// Canonical display label, e.g. `"Remote"`.
    pub fn label(&self) -> &'static str {
        match self {
            JobLocation::Remote => "Remote",
            JobLocation::Hybrid => "Hybrid",
            JobLocation::Islamabad => "Islamabad",
            JobLocation::Lahore => "Lahore",
            JobLocation::Karachi => "Karachi",
        }
    }

    /// Parse a canonical label back into its variant.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Remote" => Some(JobLocation::Remote),
            "Hybrid" => Some(JobLocation::Hybrid),
            "Islamabad" => Some(JobLocation::Islamabad),
            "Lahore" => Some(JobLocation::Lahore),
            "Karachi" => Some(JobLocation::Karachi),
            _ => None,
        }
    }
}

impl fmt::Display for JobLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A job posting assembled from a search hit.
///
/// The url is the identity: two postings with the same url are the same
/// entity regardless of any other field. Postings that survive filtering
/// always have a non-empty url.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Cleaned title (noise suffixes stripped, capped at 200 chars).
    pub title: String,

    /// Company name when a separator heuristic found one.
    pub company: Option<String>,

    /// Posting url - the sole dedup key.
    pub url: String,

    /// Posting body, truncated at extraction time.
    pub description: Option<String>,

    /// Inferred location, if any keyword matched.
    pub location: Option<JobLocation>,

    /// Identifier of the provider that produced the hit.
    pub source: String,
}

impl JobPosting {
    /// Create a posting with the required fields.
    pub fn new(title: impl Into<String>, url: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: None,
            url: url.into(),
            description: None,
            location: None,
            source: source.into(),
        }
    }

    /// Set the company.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the inferred location.
    pub fn with_location(mut self, location: JobLocation) -> Self {
        self.location = Some(location);
        self
    }
}

/// A persisted posting, as returned by recent-job reads.
///
/// The store stamps the id and timestamp at insert time and records the
/// literal query string that produced the posting. Persisted rows are
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredJob {
    pub id: Uuid,

    #[serde(flatten)]
    pub posting: JobPosting,

    /// The planned query this posting was found under (before site
    /// augmentation).
    pub search_query: String,

    pub created_at: DateTime<Utc>,
}
