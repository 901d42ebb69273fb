use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Company value sent when the user has not picked one.
pub const UNKNOWN_COMPANY: &str = "unknown";

/// Body of `POST /score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub job_description: String,
    pub company_name: String,
}

/// Full breakdown returned by the scoring service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub overall_score: f64,
    /// 0.0 – 1.0
    pub semantic_similarity: f64,
    /// Keyed by category (`programming_languages`, `databases`, ...). Sorted for stable rendering.
    pub skills_breakdown: BTreeMap<String, SkillCategoryScore>,
    pub experience_match: ExperienceMatch,
    pub company_modifier: f64,
    pub final_score: f64,
    pub explanation: String,
}

/// One skills category. The deployed service names the counts `resume_skills` /
/// `job_requirements`; the longer names are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategoryScore {
    #[serde(rename = "resume_skills", alias = "resume_skill_count")]
    pub resume_skill_count: u32,
    #[serde(rename = "job_requirements", alias = "job_requirement_count")]
    pub job_requirement_count: u32,
    /// 0 – 100
    pub score: f64,
    /// 0.0 – 1.0, weights across categories need not sum to 1
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceMatch {
    pub resume_years: f64,
    #[serde(rename = "resume_level_final", alias = "resume_level")]
    pub resume_level: String,
    pub job_years: f64,
    pub job_level: String,
    pub experience_bonus: f64,
    #[serde(rename = "leadership_keywords", alias = "leadership_keyword_count")]
    pub leadership_keyword_count: u32,
}

/// Body of `GET /health` on the scoring service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl SkillCategoryScore {
    pub fn weight_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.weight)
    }
}
