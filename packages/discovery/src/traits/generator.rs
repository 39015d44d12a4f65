//! Query generator trait for profile-driven search.
//!
//! When the user hands us an email instead of keywords, something has to
//! turn the matching profile into a search query. This trait abstracts
//! that step so the planner does not care whether the query comes from an
//! LLM or a canned mock.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Profile;

/// Synthesizes a search query from a candidate profile.
///
/// Implementations are expected to return a short, search-engine-friendly
/// string. They do not need to guarantee the profile's location appears in
/// the output - the planner enforces that afterwards - and they may fail;
/// the planner falls back to a deterministic query when they do.
///
/// # Implementations
///
/// - `OpenAiGenerator` - any OpenAI-compatible chat completions API
/// - `MockQueryGenerator` - for testing (see `testing`)
#[async_trait]
pub trait QueryGenerator: Send + Sync {
    /// Produce a search query for the given profile.
    async fn generate_query(&self, profile: &Profile) -> Result<String>;
}
