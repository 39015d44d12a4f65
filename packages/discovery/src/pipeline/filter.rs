//! Domain gate and field extraction over raw search hits.
//!
//! Everything in here is pure: raw hits in, structured postings out. Two
//! rejection rules run first (untrusted domain, thin content), then the
//! heuristics derive title, company, and location from the hit text.

use crate::traits::SearchHit;
use crate::types::{JobLocation, JobPosting};

/// Domains a hit's url must contain a substring of to survive the gate.
///
/// This list is curated independently of the gateway's include-domain
/// list; it carries two extra boards the gateway never asks for.
pub const TRUSTED_DOMAINS: [&str; 11] = [
    "linkedin.com",
    "indeed.com",
    "glassdoor.com",
    "rozee.pk",
    "mustakbil.com",
    "jobee.pk",
    "lever.co",
    "greenhouse.io",
    "workable.com",
    "remoteok.com",
    "we_work_remotely.com",
];

/// Hits with less content than this are treated as stub pages.
const MIN_CONTENT_CHARS: usize = 100;

const MAX_TITLE_CHARS: usize = 200;
const MAX_COMPANY_CHARS: usize = 100;
const MAX_DESCRIPTION_CHARS: usize = 500;

/// Board suffixes removed from titles wherever they appear.
const TITLE_NOISE: [&str; 3] = [" - LinkedIn", " | Indeed", " - Glassdoor"];

/// Company separators, checked in priority order.
const COMPANY_SEPARATORS: [&str; 4] = [" at ", " - ", " | ", " @ "];

/// Location keywords, checked in priority order against hit content.
const LOCATION_KEYWORDS: [(&str, JobLocation); 5] = [
    ("remote", JobLocation::Remote),
    ("hybrid", JobLocation::Hybrid),
    ("islamabad", JobLocation::Islamabad),
    ("lahore", JobLocation::Lahore),
    ("karachi", JobLocation::Karachi),
];

/// Gate and structure raw hits into job postings.
///
/// Hit order is preserved; `source` tags every surviving posting with the
/// provider that produced it.
pub fn filter_hits(hits: Vec<SearchHit>, source: &str) -> Vec<JobPosting> {
    let mut postings = Vec::new();

    for hit in hits {
        let url_lower = hit.url.to_lowercase();
        if !TRUSTED_DOMAINS
            .iter()
            .any(|domain| url_lower.contains(domain))
        {
            continue;
        }

        if hit.content.chars().count() < MIN_CONTENT_CHARS {
            continue;
        }

        let posting = JobPosting {
            title: clean_title(&hit.title),
            company: extract_company(&hit.title),
            url: hit.url,
            description: Some(truncate_chars(&hit.content, MAX_DESCRIPTION_CHARS)),
            location: infer_location(&hit.content),
            source: source.to_string(),
        };

        if posting.url.is_empty() {
            continue;
        }

        postings.push(posting);
    }

    postings
}

/// Remove board noise from a raw title, trim, cap the length.
fn clean_title(raw: &str) -> String {
    let mut title = raw.to_string();
    for noise in TITLE_NOISE {
        title = title.replace(noise, "");
    }
    truncate_chars(title.trim(), MAX_TITLE_CHARS)
}

/// Guess the company from the raw title's trailing segment.
///
/// Scans for the first separator present, then takes everything after its
/// last occurrence. The raw title is used on purpose, so a board suffix
/// that survives the split stays in the company string.
fn extract_company(raw_title: &str) -> Option<String> {
    for sep in COMPANY_SEPARATORS {
        if raw_title.contains(sep) {
            let trailing = raw_title.rsplit(sep).next().unwrap_or("").trim();
            let company = truncate_chars(trailing, MAX_COMPANY_CHARS);
            return (!company.is_empty()).then_some(company);
        }
    }
    None
}

/// First location keyword found in the content, or `None`.
fn infer_location(content: &str) -> Option<JobLocation> {
    let lower = content.to_lowercase();
    LOCATION_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, location)| *location)
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn hit(url: &str, content_len: usize) -> SearchHit {
        SearchHit::new(url)
            .with_title("Sales Executive at Acme - LinkedIn")
            .with_content("x".repeat(content_len))
    }

    #[test]
    fn untrusted_domains_are_dropped_regardless_of_content() {
        let hits = vec![
            hit("https://www.linkedin.com/jobs/1", 150),
            hit("https://zhihu.com/x", 200),
            hit("https://indeed.com/y", 50),
        ];

        let postings = filter_hits(hits, "tavily");

        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].url, "https://www.linkedin.com/jobs/1");
        assert_eq!(postings[0].source, "tavily");
    }

    #[test]
    fn thin_content_is_rejected_even_on_trusted_domains() {
        let postings = filter_hits(vec![hit("https://indeed.com/y", 99)], "tavily");
        assert!(postings.is_empty());

        let postings = filter_hits(vec![hit("https://indeed.com/y", 100)], "tavily");
        assert_eq!(postings.len(), 1);
    }

    #[test]
    fn empty_urls_never_survive() {
        let postings = filter_hits(vec![hit("", 500)], "tavily");
        assert!(postings.is_empty());
    }

    #[test]
    fn domain_match_is_case_insensitive() {
        let postings = filter_hits(vec![hit("https://PK.LinkedIn.com/jobs/2", 200)], "tavily");
        assert_eq!(postings.len(), 1);
    }

    #[test]
    fn title_noise_is_stripped_and_capped() {
        assert_eq!(
            clean_title("Sales Executive - LinkedIn"),
            "Sales Executive"
        );
        assert_eq!(clean_title("  Analyst | Indeed  "), "Analyst");

        let long = format!("Engineer {}", "y".repeat(300));
        assert_eq!(clean_title(&long).chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn company_comes_from_the_trailing_segment() {
        assert_eq!(
            extract_company("Sales Executive at Acme"),
            Some("Acme".to_string())
        );
        // " at " wins over later separators, split taken at its last occurrence
        assert_eq!(
            extract_company("Dev - Platform at Initech"),
            Some("Initech".to_string())
        );
        assert_eq!(
            extract_company("SDR Role - TeleTech | Indeed"),
            Some("TeleTech | Indeed".to_string())
        );
        assert_eq!(extract_company("Plain Title"), None);
        assert_eq!(extract_company("Ending at "), None);
    }

    #[test]
    fn location_keywords_resolve_in_priority_order() {
        assert_eq!(
            infer_location("Hybrid role, remote friendly, Lahore office"),
            Some(JobLocation::Remote)
        );
        assert_eq!(
            infer_location("Onsite position in LAHORE, Pakistan"),
            Some(JobLocation::Lahore)
        );
        assert_eq!(infer_location("Onsite position in Berlin"), None);
    }

    #[test]
    fn description_is_truncated_to_the_cap() {
        let hits = vec![
            SearchHit::new("https://lever.co/acme/1")
                .with_title("SDR at Acme")
                .with_content("z".repeat(800)),
        ];

        let postings = filter_hits(hits, "tavily");

        let description = postings[0].description.as_deref().unwrap();
        assert_eq!(description.chars().count(), 500);
    }

    fn url_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "https://[a-z]{3,10}\\.(com|pk|io)/[a-z0-9]{0,12}",
            Just("https://www.linkedin.com/jobs/view/42".to_string()),
            Just("https://rozee.pk/job/7".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn survivors_always_carry_a_trusted_domain(
            url in url_strategy(),
            title in ".{0,64}",
            content in ".{0,300}",
        ) {
            let hits = vec![SearchHit::new(url).with_title(title).with_content(content)];
            for posting in filter_hits(hits, "tavily") {
                let lower = posting.url.to_lowercase();
                prop_assert!(TRUSTED_DOMAINS.iter().any(|d| lower.contains(d)));
            }
        }

        #[test]
        fn thin_content_never_survives(content in ".{0,99}") {
            let hits = vec![
                SearchHit::new("https://indeed.com/viewjob").with_content(content),
            ];
            prop_assert!(filter_hits(hits, "tavily").is_empty());
        }

        #[test]
        fn extracted_fields_respect_their_caps(
            title in ".{0,400}",
            content in ".{100,900}",
        ) {
            let hits = vec![
                SearchHit::new("https://lever.co/acme/1")
                    .with_title(title)
                    .with_content(content),
            ];

            let postings = filter_hits(hits, "tavily");

            prop_assert_eq!(postings.len(), 1);
            let posting = &postings[0];
            prop_assert!(posting.title.chars().count() <= MAX_TITLE_CHARS);
            prop_assert!(posting
                .company
                .as_ref()
                .map_or(true, |c| c.chars().count() <= MAX_COMPANY_CHARS));
            prop_assert!(posting
                .description
                .as_ref()
                .map_or(true, |d| d.chars().count() <= MAX_DESCRIPTION_CHARS));
        }
    }
}
