use serde::Serialize;

use crate::resume::info::ExtractedInfo;
use crate::resume::scan::CategorizedSkills;
use crate::resume::taxonomy::{CLOUD_DEVOPS, DATA_SCIENCE_AI, PROGRAMMING_LANGUAGES, WEB_TECHNOLOGIES};

/// Below this coverage the profile is flagged as thin.
const LOW_COVERAGE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    SkillEnhancement,
    CareerPath,
    SkillGap,
    Improvement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub message: &'static str,
    pub priority: Priority,
}

/// Applies the fixed rule list in order; each rule contributes at most one entry.
pub fn generate_recommendations(
    skills: &CategorizedSkills,
    info: &ExtractedInfo,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if skills.has(WEB_TECHNOLOGIES, "React") && skills.has(PROGRAMMING_LANGUAGES, "JavaScript") {
        out.push(Recommendation {
            kind: RecommendationKind::SkillEnhancement,
            message: "Consider learning Next.js to complement your React skills",
            priority: Priority::Medium,
        });
    }

    if skills.has(PROGRAMMING_LANGUAGES, "Python") && !skills.has_any(DATA_SCIENCE_AI) {
        out.push(Recommendation {
            kind: RecommendationKind::CareerPath,
            message: "With Python skills, consider exploring Data Science or Machine Learning",
            priority: Priority::High,
        });
    }

    if skills.has_any(WEB_TECHNOLOGIES) && !skills.has_any(CLOUD_DEVOPS) {
        out.push(Recommendation {
            kind: RecommendationKind::SkillGap,
            message: "Consider learning cloud platforms (AWS, Azure) for modern web development",
            priority: Priority::Medium,
        });
    }

    if info.skill_coverage < LOW_COVERAGE {
        out.push(Recommendation {
            kind: RecommendationKind::Improvement,
            message: "Consider adding more technical skills to increase your profile strength",
            priority: Priority::High,
        });
    }

    out
}
