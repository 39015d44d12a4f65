//! Query planning: decide what string actually goes to the provider.
//!
//! Two modes. Keyword mode passes the input through verbatim. Resume mode
//! kicks in when the input is an email address with a known profile: the
//! query is synthesized from the profile, with a deterministic fallback
//! when synthesis fails. Planning itself never fails the request - every
//! problem on this path degrades to a usable query.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::traits::{ProfileStore, QueryGenerator};
use crate::types::{PlannedSearch, Profile, SearchMode};

lazy_static! {
    // Whole-input email shape: local@domain.tld, no @ or whitespace in the parts
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[^@\s]+@[^@\s]+\.[^@\s]+$"
    ).unwrap();
}

/// Skills used when building the deterministic fallback query.
const FALLBACK_SKILLS: usize = 3;

/// Resolves raw user input into a provider-ready query.
pub struct QueryPlanner {
    profiles: Arc<dyn ProfileStore>,
    generator: Arc<dyn QueryGenerator>,
}

impl QueryPlanner {
    pub fn new(profiles: Arc<dyn ProfileStore>, generator: Arc<dyn QueryGenerator>) -> Self {
        Self {
            profiles,
            generator,
        }
    }

    /// Plan the search for the given raw input.
    ///
    /// An email input with no matching profile degrades to keyword mode
    /// over the literal input rather than failing; a profile-store error
    /// is treated the same as a miss.
    pub async fn plan(&self, raw_input: &str) -> PlannedSearch {
        let trimmed = raw_input.trim();

        if EMAIL_REGEX.is_match(trimmed) {
            match self.profiles.get_by_email(trimmed).await {
                Ok(Some(profile)) => return self.plan_from_profile(raw_input, &profile).await,
                Ok(None) => {
                    debug!("no profile for {}, searching the input verbatim", trimmed);
                }
                Err(e) => {
                    warn!("profile lookup failed for {}: {}", trimmed, e);
                }
            }
        }

        PlannedSearch {
            input: raw_input.to_string(),
            mode: SearchMode::Keyword,
            query: raw_input.to_string(),
            user_location: None,
        }
    }

    async fn plan_from_profile(&self, raw_input: &str, profile: &Profile) -> PlannedSearch {
        let location = profile.normalized_location();

        let query = match self.generator.generate_query(profile).await {
            Ok(synthesized) => enforce_location(synthesized, location),
            Err(e) => {
                warn!("query synthesis failed: {}, using deterministic fallback", e);
                fallback_query(profile)
            }
        };

        debug!("planned resume-mode query: {}", query);

        PlannedSearch {
            input: raw_input.to_string(),
            mode: SearchMode::Resume,
            query,
            user_location: location.map(str::to_string),
        }
    }
}

/// Append `" in {location}"` unless the query already mentions the
/// location (case-insensitive). The generator is asked to include it, but
/// this is not trusted.
fn enforce_location(query: String, location: Option<&str>) -> String {
    match location {
        Some(loc) if !query.to_lowercase().contains(&loc.to_lowercase()) => {
            format!("{query} in {loc}")
        }
        _ => query,
    }
}

/// Deterministic query used when synthesis fails: first skills joined
/// with spaces, a location clause, and a literal `jobs` suffix.
fn fallback_query(profile: &Profile) -> String {
    let skills = profile
        .skills
        .iter()
        .take(FALLBACK_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    let location_clause = match profile.normalized_location() {
        Some(loc) => format!(" in {loc}"),
        None => " (Remote or localized)".to_string(),
    };

    format!("{skills}{location_clause} jobs")
}
