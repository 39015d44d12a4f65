//! Core data types shared across the pipeline.

pub mod job;
pub mod profile;
pub mod response;
pub mod search;

pub use job::{JobLocation, JobPosting, StoredJob};
pub use profile::Profile;
pub use response::{JobResult, SearchResponse};
pub use search::{PlannedSearch, SearchMode};
