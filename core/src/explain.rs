use crate::aggregate::aggregate;
use crate::factors::{location_fit_prepared, LocationFit, PreparedProfile, SkillCoverage};
use crate::model::{JobPosting, MatchResult, ScoreBreakdown, TalentProfile};
use serde::{Deserialize, Serialize};

/// A match result together with the evidence behind each factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchExplanation {
    pub result: MatchResult,
    /// Normalized required skills the talent holds, ascending.
    pub matched_skills: Vec<String>,
    /// Normalized required skills the talent lacks, ascending.
    pub missing_skills: Vec<String>,
    pub location_fit: LocationFit,
}

pub fn explain_match(profile: &TalentProfile, posting: &JobPosting) -> MatchExplanation {
    let prepared = PreparedProfile::new(profile);
    let coverage = SkillCoverage::compute(&prepared.skills, posting);
    let location_fit = location_fit_prepared(&prepared.languages, posting);
    let breakdown = ScoreBreakdown {
        skills_overlap: coverage.score(),
        readiness: prepared.readiness,
        language_match: location_fit.score(),
    };
    MatchExplanation {
        result: MatchResult { job_id: posting.id.clone(), score: aggregate(&breakdown), breakdown },
        matched_skills: coverage.matched,
        missing_skills: coverage.missing,
        location_fit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostingStatus;
    use crate::rank::score_posting;

    #[test]
    fn explanation_lists_coverage() {
        let profile = TalentProfile {
            skills: vec!["SAP FI".into(), "Excel".into()],
            languages: vec!["German".into()],
            readiness_score: 80,
            years_of_experience: 4,
        };
        let posting = JobPosting {
            id: "a".into(),
            required_skills: vec!["SAP MM".into(), "sap  fi".into()],
            location: Some("Berlin".into()),
            status: PostingStatus::Open,
        };
        let explained = explain_match(&profile, &posting);
        assert_eq!(explained.matched_skills, vec!["sap fi"]);
        assert_eq!(explained.missing_skills, vec!["sap mm"]);
        assert_eq!(explained.location_fit, LocationFit::NoLanguageMatch);
        assert_eq!(explained.result, score_posting(&profile, &posting));
        assert_eq!(explained.result.score, 54);
    }
}
