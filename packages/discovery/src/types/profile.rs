use serde::{Deserialize, Serialize};

/// A candidate profile keyed by email address.
///
/// Profiles are read-only inputs to query planning: the planner consumes
/// skills and experience to synthesize a query, and the ranker consumes
/// the location to score results. Nothing in the pipeline writes profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub experience_summary: String,

    #[serde(default)]
    pub location: Option<String>,
}

impl Profile {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            skills: Vec::new(),
            experience_summary: String::new(),
            location: None,
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_experience(mut self, summary: impl Into<String>) -> Self {
        self.experience_summary = summary.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Location with whitespace trimmed, or `None` when absent or blank.
    ///
    /// An empty or whitespace-only location behaves exactly like a missing
    /// one everywhere downstream.
    pub fn normalized_location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|loc| !loc.is_empty())
    }
}
