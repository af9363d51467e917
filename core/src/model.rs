use serde::{Deserialize, Serialize};

pub type JobId = String;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    /// Upstream placement-readiness, expected in [0, 100]; clamped when scored.
    #[serde(default)]
    pub readiness_score: i64,
    /// Carried for callers; not a scoring factor.
    #[serde(default)]
    pub years_of_experience: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostingStatus {
    #[default]
    Open,
    Closed,
    Draft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: JobId,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: PostingStatus,
}

impl JobPosting {
    pub fn is_open(&self) -> bool {
        self.status == PostingStatus::Open
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skills_overlap: u8,
    pub readiness: u8,
    /// Location/language fit folded into one factor.
    pub language_match: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub job_id: JobId,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}
