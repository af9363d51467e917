use crate::aggregate::aggregate;
use crate::factors::{location_fit_prepared, PreparedProfile, SkillCoverage};
use crate::model::{JobPosting, MatchResult, ScoreBreakdown, TalentProfile};
use rayon::prelude::*;
use std::cmp::Ordering;

pub(crate) fn score_prepared(prepared: &PreparedProfile, posting: &JobPosting) -> MatchResult {
    let breakdown = ScoreBreakdown {
        skills_overlap: SkillCoverage::compute(&prepared.skills, posting).score(),
        readiness: prepared.readiness,
        language_match: location_fit_prepared(&prepared.languages, posting).score(),
    };
    MatchResult { job_id: posting.id.clone(), score: aggregate(&breakdown), breakdown }
}

/// Score a single posting for a talent.
pub fn score_posting(profile: &TalentProfile, posting: &JobPosting) -> MatchResult {
    score_prepared(&PreparedProfile::new(profile), posting)
}

/// Score descending, then job id ascending.
pub fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.job_id.cmp(&b.job_id))
}

/// Rank `postings` for `profile` and keep the best `limit`.
///
/// Every posting is scored; callers pass only the postings they consider
/// eligible. A non-positive `limit` yields an empty list.
pub fn rank_matches(profile: &TalentProfile, postings: &[JobPosting], limit: i64) -> Vec<MatchResult> {
    if limit <= 0 || postings.is_empty() {
        return Vec::new();
    }
    let prepared = PreparedProfile::new(profile);
    let mut results: Vec<MatchResult> = postings
        .par_iter()
        .map(|posting| score_prepared(&prepared, posting))
        .collect();
    results.sort_by(compare_results);
    let keep = usize::try_from(limit).unwrap_or(usize::MAX);
    results.truncate(keep);
    tracing::debug!(candidates = postings.len(), returned = results.len(), "ranked postings");
    results
}
