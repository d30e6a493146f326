//! Job-match scoring: how many of the skills a job description mentions does the user have.
//!
//! Pluggable through the [`JobMatcher`] trait; `AppState` carries an
//! `Arc<dyn JobMatcher>` so a different backend can be swapped in at startup
//! without touching the handler.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::AppError;
use crate::resume::scan::mentions;
use crate::resume::taxonomy::SKILL_CATEGORIES;

/// The caller's skills, keyed by taxonomy category (as returned by resume analysis).
pub type UserSkills = HashMap<String, Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Matched,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillMatch {
    pub skill: &'static str,
    pub category: &'static str,
    pub status: MatchStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchReport {
    /// 0 – 100
    pub match_score: u32,
    pub matched_skills: Vec<SkillMatch>,
    pub missing_skills: Vec<SkillMatch>,
    pub total_required_skills: usize,
    pub recommendation: &'static str,
}

#[async_trait]
pub trait JobMatcher: Send + Sync {
    async fn score(
        &self,
        job_description: &str,
        user_skills: &UserSkills,
    ) -> Result<JobMatchReport, AppError>;
}

/// Deterministic matcher over the static taxonomy. No weighting, no learning.
pub struct TaxonomyJobMatcher;

#[async_trait]
impl JobMatcher for TaxonomyJobMatcher {
    async fn score(
        &self,
        job_description: &str,
        user_skills: &UserSkills,
    ) -> Result<JobMatchReport, AppError> {
        Ok(compute_job_match(job_description, user_skills))
    }
}

/// For every (category, skill) the description mentions, the skill is matched when
/// the user's list for that same category holds it (case-insensitive), else missing.
pub fn compute_job_match(job_description: &str, user_skills: &UserSkills) -> JobMatchReport {
    let job_text = job_description.to_lowercase();
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for (category, skills) in SKILL_CATEGORIES {
        let owned = user_skills.get(*category);
        for skill in skills.iter().copied() {
            let skill_lower = skill.to_lowercase();
            if !mentions(&job_text, &skill_lower) {
                continue;
            }
            let has_skill = owned
                .is_some_and(|list| list.iter().any(|s| s.trim().to_lowercase() == skill_lower));
            let status = if has_skill {
                MatchStatus::Matched
            } else {
                MatchStatus::Missing
            };
            let entry = SkillMatch {
                skill,
                category,
                status,
            };
            match status {
                MatchStatus::Matched => matched_skills.push(entry),
                MatchStatus::Missing => missing_skills.push(entry),
            }
        }
    }

    let total_required_skills = matched_skills.len() + missing_skills.len();
    let match_score = if total_required_skills > 0 {
        (matched_skills.len() as f64 / total_required_skills as f64 * 100.0).round() as u32
    } else {
        0
    };

    JobMatchReport {
        match_score,
        matched_skills,
        missing_skills,
        total_required_skills,
        recommendation: match_recommendation(match_score),
    }
}

fn match_recommendation(score: u32) -> &'static str {
    if score >= 80 {
        "Excellent match! You should definitely apply."
    } else if score >= 60 {
        "Good match. Consider applying and highlighting your relevant skills."
    } else if score >= 40 {
        "Moderate match. Focus on the skills you have and consider learning the missing ones."
    } else {
        "Lower match. Consider gaining more relevant skills before applying."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::taxonomy::{
        CLOUD_DEVOPS, MOBILE_DEVELOPMENT, PROGRAMMING_LANGUAGES, WEB_TECHNOLOGIES,
    };

    fn skills(pairs: &[(&str, &[&str])]) -> UserSkills {
        pairs
            .iter()
            .map(|(cat, list)| (cat.to_string(), list.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    fn names(list: &[SkillMatch]) -> Vec<&'static str> {
        list.iter().map(|m| m.skill).collect()
    }

    #[test]
    fn test_react_and_aws_half_match() {
        let report = compute_job_match(
            "We use React and AWS.",
            &skills(&[(WEB_TECHNOLOGIES, &["React"])]),
        );
        assert_eq!(names(&report.matched_skills), vec!["React"]);
        assert_eq!(names(&report.missing_skills), vec!["AWS"]);
        assert_eq!(report.total_required_skills, 2);
        assert_eq!(report.match_score, 50);
        assert_eq!(report.missing_skills[0].category, CLOUD_DEVOPS);
        assert_eq!(report.missing_skills[0].status, MatchStatus::Missing);
    }

    #[test]
    fn test_no_mentioned_skills_scores_zero() {
        let report = compute_job_match("zzz", &skills(&[(WEB_TECHNOLOGIES, &["React"])]));
        assert_eq!(report.total_required_skills, 0);
        assert_eq!(report.match_score, 0);
        assert!(report.recommendation.starts_with("Lower match"));
    }

    #[test]
    fn test_ownership_is_scoped_to_category() {
        // Swift is listed under both languages and mobile; the user only claims it
        // as a language, so the mobile mention stays missing.
        let report = compute_job_match(
            "swift",
            &skills(&[(PROGRAMMING_LANGUAGES, &["swift"])]),
        );
        assert_eq!(report.matched_skills.len(), 1);
        assert_eq!(report.matched_skills[0].category, PROGRAMMING_LANGUAGES);
        assert_eq!(report.missing_skills.len(), 1);
        assert_eq!(report.missing_skills[0].category, MOBILE_DEVELOPMENT);
        assert_eq!(report.match_score, 50);
    }

    #[test]
    fn test_full_match_is_excellent() {
        let report = compute_job_match(
            "html",
            &skills(&[(WEB_TECHNOLOGIES, &["HTML"])]),
        );
        assert_eq!(report.match_score, 100);
        assert_eq!(report.recommendation, "Excellent match! You should definitely apply.");
    }

    #[test]
    fn test_recommendation_bands() {
        assert!(match_recommendation(80).starts_with("Excellent"));
        assert!(match_recommendation(79).starts_with("Good"));
        assert!(match_recommendation(60).starts_with("Good"));
        assert!(match_recommendation(40).starts_with("Moderate"));
        assert!(match_recommendation(39).starts_with("Lower"));
    }

    #[tokio::test]
    async fn test_trait_object_delegates_to_taxonomy_scan() {
        let matcher: Box<dyn JobMatcher> = Box::new(TaxonomyJobMatcher);
        let report = matcher
            .score("docker", &skills(&[(CLOUD_DEVOPS, &["Docker"])]))
            .await
            .unwrap();
        assert_eq!(report.match_score, 100);
    }
}
