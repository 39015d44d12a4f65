//! Location-affinity ranking over filtered postings.
//!
//! The score is binary: a posting either matches the user's location or
//! it does not. Matching postings float to the top; everything else keeps
//! the provider's original relevance order. Scores order, never exclude.

use std::cmp::Reverse;

use crate::types::JobPosting;

/// Score granted on a location match.
const LOCATION_MATCH_SCORE: i32 = 10;

/// Score a posting against the user's location.
///
/// 10 when both locations are present and one contains the other
/// case-insensitively, otherwise 0. An empty user location scores
/// everything 0.
pub fn score(posting: &JobPosting, user_location: &str) -> i32 {
    let user = user_location.to_lowercase();
    if user.is_empty() {
        return 0;
    }

    let Some(location) = posting.location else {
        return 0;
    };
    let job = location.label().to_lowercase();

    if user.contains(&job) || job.contains(&user) {
        LOCATION_MATCH_SCORE
    } else {
        0
    }
}

/// Stable-sort postings by descending score.
///
/// Equal scores keep their relative arrival order; there is no secondary
/// tie-break key.
pub fn rank(mut jobs: Vec<JobPosting>, user_location: Option<&str>) -> Vec<JobPosting> {
    let user = user_location.unwrap_or_default();
    jobs.sort_by_key(|job| Reverse(score(job, user)));
    jobs
}
