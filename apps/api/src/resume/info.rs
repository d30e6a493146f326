use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::resume::taxonomy::EDUCATION_KEYWORDS;

/// Contact and background hints pulled out of resume text by regex.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedInfo {
    pub email: Vec<String>,
    pub phone: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<&'static str>,
    pub skill_coverage: u32,
}

struct Patterns {
    email: Regex,
    phone: Regex,
    experience: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b")
            .expect("email pattern is valid"),
        phone: Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("phone pattern is valid"),
        experience: Regex::new(r"(?i)\b(\d+)\+?\s*(years?|yrs?)\s*(of\s*)?(experience|exp)")
            .expect("experience pattern is valid"),
    })
}

fn all_matches(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Runs the extractors over the lowercased `text`.
pub fn extract_info(text: &str, skill_coverage: u32) -> ExtractedInfo {
    let text = text.to_lowercase();
    let p = patterns();

    ExtractedInfo {
        email: all_matches(&p.email, &text),
        phone: all_matches(&p.phone, &text),
        experience: all_matches(&p.experience, &text),
        education: EDUCATION_KEYWORDS
            .iter()
            .copied()
            .filter(|kw| text.contains(kw))
            .collect(),
        skill_coverage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "John Doe\nJohn.Doe@Email.com | 555-123-4567 | 555.987.6543\n\
        Software engineer with 3 years of experience and 5+ yrs exp in support.\n\
        Bachelor of Science, Computer Science, State University";

    #[test]
    fn test_extracts_contacts_from_lowercased_text() {
        let info = extract_info(RESUME, 40);
        assert_eq!(info.email, vec!["john.doe@email.com"]);
        assert_eq!(info.phone, vec!["555-123-4567", "555.987.6543"]);
        assert_eq!(info.skill_coverage, 40);
    }

    #[test]
    fn test_experience_phrases() {
        let info = extract_info(RESUME, 0);
        assert_eq!(info.experience, vec!["3 years of experience", "5+ yrs exp"]);
    }

    #[test]
    fn test_education_keywords_in_list_order() {
        let info = extract_info(RESUME, 0);
        assert_eq!(info.education, vec!["bachelor", "university", "computer science"]);
    }

    #[test]
    fn test_nothing_found_gives_empty_lists() {
        let info = extract_info("hello world", 0);
        assert!(info.email.is_empty());
        assert!(info.phone.is_empty());
        assert!(info.experience.is_empty());
        assert!(info.education.is_empty());
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["email"], serde_json::json!([]));
        assert!(value.get("skillCoverage").is_some());
    }
}
