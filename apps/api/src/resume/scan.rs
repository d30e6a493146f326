//! Case-insensitive substring scan of text against the skill taxonomy.
//!
//! Plain containment, no stemming: "java" also matches inside "javascript".
//! Skills of one or two characters ("R", "Go", "C#") must stand alone, or
//! they would match nearly any text.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::resume::taxonomy::{BASIC_SKILL_KEYWORDS, SKILL_CATEGORIES};

/// Number of matched skills that counts as full coverage.
const FULL_COVERAGE_SKILLS: usize = 20;

/// Skills this short only match between non-alphanumeric neighbours.
const BOUNDED_SKILL_MAX_CHARS: usize = 2;

/// Whether lowercase `haystack` mentions lowercase `skill`.
pub fn mentions(haystack: &str, skill: &str) -> bool {
    if skill.chars().count() > BOUNDED_SKILL_MAX_CHARS {
        return haystack.contains(skill);
    }
    haystack.match_indices(skill).any(|(start, m)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + m.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Matched skills grouped by category, in taxonomy order. Serializes as a JSON
/// object; categories without matches are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedSkills(Vec<(&'static str, Vec<&'static str>)>);

impl CategorizedSkills {
    pub fn get(&self, category: &str) -> Option<&[&'static str]> {
        self.0
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, skills)| skills.as_slice())
    }

    /// True when `category` matched and includes `skill`.
    pub fn has(&self, category: &str, skill: &str) -> bool {
        self.get(category).is_some_and(|s| s.contains(&skill))
    }

    pub fn has_any(&self, category: &str) -> bool {
        self.get(category).is_some_and(|s| !s.is_empty())
    }

    /// Total matches; a skill found under two categories counts twice.
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, skills)| skills.len()).sum()
    }
}

impl Serialize for CategorizedSkills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, skills) in &self.0 {
            map.serialize_entry(category, skills)?;
        }
        map.end()
    }
}

/// Scans `text` against every taxonomy category.
pub fn scan_skills(text: &str) -> CategorizedSkills {
    let haystack = text.to_lowercase();
    let found = SKILL_CATEGORIES
        .iter()
        .filter_map(|(category, skills)| {
            let matched: Vec<&'static str> = skills
                .iter()
                .copied()
                .filter(|skill| mentions(&haystack, &skill.to_lowercase()))
                .collect();
            (!matched.is_empty()).then_some((*category, matched))
        })
        .collect();
    CategorizedSkills(found)
}

/// `min(100, round(matched / 20 × 100))`.
pub fn coverage_score(matched: usize) -> u32 {
    let pct = (matched as f64 / FULL_COVERAGE_SKILLS as f64 * 100.0).round();
    pct.min(100.0) as u32
}

/// The flat keyword scan behind the simple analysis endpoint.
pub fn scan_basic_keywords(text: &str) -> Vec<&'static str> {
    let haystack = text.to_lowercase();
    BASIC_SKILL_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| mentions(&haystack, &kw.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::taxonomy::{
        CLOUD_DEVOPS, DATABASES, MOBILE_DEVELOPMENT, PROGRAMMING_LANGUAGES, WEB_TECHNOLOGIES,
    };
    use serde_json::json;

    #[test]
    fn test_match_is_case_insensitive() {
        let skills = scan_skills("Built services with DOCKER and postgresql");
        assert!(skills.has(CLOUD_DEVOPS, "Docker"));
        assert!(skills.has(DATABASES, "PostgreSQL"));
    }

    #[test]
    fn test_substring_semantics_are_kept() {
        // Longer skills are plain substrings: "javascript" contains "java".
        let skills = scan_skills("javascript");
        let langs = skills.get(PROGRAMMING_LANGUAGES).unwrap();
        assert!(langs.contains(&"JavaScript"));
        assert!(langs.contains(&"Java"));
    }

    #[test]
    fn test_short_skills_need_boundaries() {
        assert!(!mentions("react and google", "r"));
        assert!(!mentions("react and google", "go"));
        assert!(mentions("python, r and go.", "r"));
        assert!(mentions("python, r and go.", "go"));
        assert!(mentions("c# developer", "c#"));
        assert!(mentions("(c#)", "c#"));
        assert!(!mentions("abc#", "c#"));
    }

    #[test]
    fn test_shared_skill_counts_in_both_categories() {
        let skills = scan_skills("swift");
        assert!(skills.has(PROGRAMMING_LANGUAGES, "Swift"));
        assert!(skills.has(MOBILE_DEVELOPMENT, "Swift"));
        assert_eq!(skills.total(), 2);
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let skills = scan_skills("xyz");
        assert_eq!(skills.total(), 0);
        assert_eq!(serde_json::to_value(&skills).unwrap(), json!({}));
    }

    #[test]
    fn test_serializes_in_taxonomy_order() {
        let skills = scan_skills("html and aws");
        let text = serde_json::to_string(&skills).unwrap();
        let web = text.find(WEB_TECHNOLOGIES).unwrap();
        let cloud = text.find(CLOUD_DEVOPS).unwrap();
        assert!(web < cloud);
        assert_eq!(
            serde_json::to_value(&skills).unwrap()[WEB_TECHNOLOGIES],
            json!(["HTML"])
        );
    }

    #[test]
    fn test_coverage_is_monotonic_and_capped() {
        let mut previous = 0;
        for n in 0..=40 {
            let score = coverage_score(n);
            assert!(score >= previous);
            assert!(score <= 100);
            previous = score;
        }
        assert_eq!(coverage_score(0), 0);
        assert_eq!(coverage_score(5), 25);
        assert_eq!(coverage_score(7), 35);
        assert_eq!(coverage_score(20), 100);
        assert_eq!(coverage_score(33), 100);
    }

    #[test]
    fn test_basic_keywords_keep_list_order() {
        let found = scan_basic_keywords("Docker, mongodb, node and some java");
        assert_eq!(found, vec!["Node", "MongoDB", "Java", "Docker"]);
    }
}
