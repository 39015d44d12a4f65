//! Prompt construction for query synthesis.
//!
//! Kept separate from the HTTP client so the exact text sent to the model
//! can be unit tested without a network.

use crate::types::Profile;

/// Skills beyond this count are dropped from the prompt.
pub const MAX_PROMPT_SKILLS: usize = 8;

/// Experience summary is cut at this many characters.
pub const MAX_PROMPT_EXPERIENCE_CHARS: usize = 300;

/// Build the user prompt for turning a profile into a search query.
///
/// The model is told to produce one short English query and to include
/// the location when one is given. The planner re-checks that last rule
/// afterwards, so a model that ignores it does not break anything.
pub fn build_query_prompt(profile: &Profile) -> String {
    let skills = profile
        .skills
        .iter()
        .take(MAX_PROMPT_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let experience: String = profile
        .experience_summary
        .chars()
        .take(MAX_PROMPT_EXPERIENCE_CHARS)
        .collect();

    let (target, location_rule) = match profile.normalized_location() {
        Some(loc) => (
            loc.to_string(),
            format!("If the location is \"{loc}\", the query MUST include \"{loc}\"."),
        ),
        None => (
            "Anywhere (prioritize remote or local-to-the-user roles)".to_string(),
            "Prefer remote-friendly phrasing when no location is given.".to_string(),
        ),
    };

    format!(
        r#"Create a job search query based on this profile:

Skills: {skills}
Experience: {experience}
Target Location: {target}

Instructions:
1. Generate ONE search query (5-10 words) STRICTLY IN ENGLISH.
2. {location_rule}
3. Avoid generic global terms that attract irrelevant listings.

Return ONLY the search query in English. No other characters or languages."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_caps_skills_and_experience() {
        let skills: Vec<String> = (0..12).map(|i| format!("skill{i}")).collect();
        let profile = Profile::new("a@b.co")
            .with_skills(skills)
            .with_experience("x".repeat(400));

        let prompt = build_query_prompt(&profile);

        assert!(prompt.contains("skill7"));
        assert!(!prompt.contains("skill8"));
        assert!(prompt.contains(&"x".repeat(300)));
        assert!(!prompt.contains(&"x".repeat(301)));
    }

    #[test]
    fn prompt_names_the_location_when_present() {
        let profile = Profile::new("a@b.co")
            .with_skills(["sales"])
            .with_location("Islamabad");

        let prompt = build_query_prompt(&profile);

        assert!(prompt.contains("Target Location: Islamabad"));
        assert!(prompt.contains("MUST include \"Islamabad\""));
    }

    #[test]
    fn prompt_falls_back_to_anywhere_without_location() {
        let profile = Profile::new("a@b.co").with_skills(["sales"]);
        let prompt = build_query_prompt(&profile);

        assert!(prompt.contains("Anywhere"));
        assert!(!prompt.contains("MUST include"));
    }
}
