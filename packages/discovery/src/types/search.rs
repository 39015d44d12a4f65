use serde::{Deserialize, Serialize};

/// How the query string was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// The user's input was used verbatim.
    Keyword,
    /// The input was an email that resolved to a profile, and the query
    /// was synthesized from that profile.
    Resume,
}

/// Output of the query planner: a provider-ready query plus the context
/// the rest of the pipeline needs.
///
/// `mode` is `Resume` if and only if a profile was actually found and
/// used, so `is_auto_generated` needs no separate flag. `user_location`
/// is captured here so ranking never has to go back to the profile store.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSearch {
    /// The literal input the user supplied.
    pub input: String,

    pub mode: SearchMode,

    /// The query string to send to the provider, before site augmentation.
    pub query: String,

    /// The profile's location, when one was found and non-blank.
    pub user_location: Option<String>,
}

impl PlannedSearch {
    /// Whether the query was synthesized rather than taken verbatim.
    pub fn is_auto_generated(&self) -> bool {
        self.mode == SearchMode::Resume
    }
}
