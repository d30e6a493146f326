use serde::Serialize;

use crate::resume::info::{extract_info, ExtractedInfo};
use crate::resume::recommendations::{generate_recommendations, Recommendation};
use crate::resume::scan::{coverage_score, scan_skills, CategorizedSkills};

/// Everything derived from the resume text itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub skills: CategorizedSkills,
    pub total_skills: usize,
    pub extracted_info: ExtractedInfo,
    pub recommendations: Vec<Recommendation>,
}

/// Skill scan → coverage → regex extraction → recommendation rules.
pub fn analyze_text(text: &str) -> ResumeAnalysis {
    let skills = scan_skills(text);
    let total_skills = skills.total();
    let extracted_info = extract_info(text, coverage_score(total_skills));
    let recommendations = generate_recommendations(&skills, &extracted_info);

    ResumeAnalysis {
        skills,
        total_skills,
        extracted_info,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::recommendations::RecommendationKind;
    use crate::resume::taxonomy::{DATABASES, PROGRAMMING_LANGUAGES, WEB_TECHNOLOGIES};
    use serde_json::json;

    const RESUME: &str = r#"
        Jane Smith | jane.smith@example.com | 555-123-4567
        Full stack developer with 4 years of experience.
        Skills: JavaScript, TypeScript, React, Node.js, HTML, CSS, MongoDB, Git
        Education: Bachelor of Engineering, Tech University
    "#;

    #[test]
    fn test_full_pipeline() {
        let analysis = analyze_text(RESUME);

        assert!(analysis.skills.has(PROGRAMMING_LANGUAGES, "TypeScript"));
        assert!(analysis.skills.has(WEB_TECHNOLOGIES, "Node.js"));
        assert!(analysis.skills.has(DATABASES, "MongoDB"));
        assert_eq!(analysis.total_skills, analysis.skills.total());
        assert_eq!(
            analysis.extracted_info.skill_coverage,
            coverage_score(analysis.total_skills)
        );
        assert_eq!(analysis.extracted_info.email, vec!["jane.smith@example.com"]);
        assert_eq!(analysis.extracted_info.experience, vec!["4 years of experience"]);

        let kinds: Vec<_> = analysis.recommendations.iter().map(|r| r.kind).collect();
        assert!(kinds.contains(&RecommendationKind::SkillEnhancement));
        assert!(kinds.contains(&RecommendationKind::SkillGap));
    }

    #[test]
    fn test_empty_text() {
        let analysis = analyze_text("");
        assert_eq!(analysis.total_skills, 0);
        assert_eq!(analysis.extracted_info.skill_coverage, 0);
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["skills"], json!({}));
        assert_eq!(value["recommendations"][0]["type"], json!("improvement"));
    }
}
