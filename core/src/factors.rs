//! The three factor scorers. Each is a pure function of a profile and a
//! posting returning a value in [0, 100].
//!
//! `rank_matches` normalizes the profile once through [`PreparedProfile`];
//! the free functions are the per-pair entry points.

use crate::model::{JobPosting, TalentProfile};
use crate::normalize::{normalize_set, normalize_token, REMOTE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MAX_SCORE: u8 = 100;

/// Score when the talent states no languages for a constrained location.
pub const UNKNOWN_LANGUAGES_SCORE: u8 = 50;
/// Floor for a constrained location with no language/location overlap.
pub const NO_LANGUAGE_MATCH_SCORE: u8 = 25;

/// Which location/language rule produced `languageMatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationFit {
    NoConstraint,
    UnknownLanguages,
    LanguageMatch,
    NoLanguageMatch,
}

impl LocationFit {
    pub fn score(self) -> u8 {
        match self {
            LocationFit::NoConstraint | LocationFit::LanguageMatch => MAX_SCORE,
            LocationFit::UnknownLanguages => UNKNOWN_LANGUAGES_SCORE,
            LocationFit::NoLanguageMatch => NO_LANGUAGE_MATCH_SCORE,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PreparedProfile {
    pub skills: BTreeSet<String>,
    pub languages: BTreeSet<String>,
    pub readiness: u8,
}

impl PreparedProfile {
    pub fn new(profile: &TalentProfile) -> Self {
        Self {
            skills: normalize_set(&profile.skills),
            languages: normalize_set(&profile.languages),
            readiness: clamp_readiness(profile.readiness_score),
        }
    }
}

/// Required skills split into the ones the talent has and the ones it lacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SkillCoverage {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl SkillCoverage {
    pub fn compute(talent: &BTreeSet<String>, posting: &JobPosting) -> Self {
        let required = normalize_set(&posting.required_skills);
        let (matched, missing) = required.into_iter().partition(|s| talent.contains(s));
        Self { matched, missing }
    }

    /// `round(100 * matched / required)`, or 100 when nothing is required.
    pub fn score(&self) -> u8 {
        let required = (self.matched.len() + self.missing.len()) as u64;
        if required == 0 {
            return MAX_SCORE;
        }
        let matched = self.matched.len() as u64;
        // half-up rounding in integers
        let pct = (200 * matched + required) / (2 * required);
        pct.min(MAX_SCORE as u64) as u8
    }
}

pub(crate) fn location_fit_prepared(languages: &BTreeSet<String>, posting: &JobPosting) -> LocationFit {
    let location = posting
        .location
        .as_deref()
        .map(normalize_token)
        .unwrap_or_default();
    if location.is_empty() || location == REMOTE {
        return LocationFit::NoConstraint;
    }
    if languages.is_empty() {
        return LocationFit::UnknownLanguages;
    }
    let overlaps = languages
        .iter()
        .any(|lang| location.contains(lang.as_str()) || lang.contains(location.as_str()));
    if overlaps {
        LocationFit::LanguageMatch
    } else {
        LocationFit::NoLanguageMatch
    }
}

pub fn clamp_readiness(raw: i64) -> u8 {
    raw.clamp(0, MAX_SCORE as i64) as u8
}

/// Share of the posting's required skills the talent holds.
pub fn skills_overlap(profile: &TalentProfile, posting: &JobPosting) -> u8 {
    SkillCoverage::compute(&normalize_set(&profile.skills), posting).score()
}

pub fn readiness(profile: &TalentProfile, _posting: &JobPosting) -> u8 {
    clamp_readiness(profile.readiness_score)
}

pub fn location_fit(profile: &TalentProfile, posting: &JobPosting) -> LocationFit {
    location_fit_prepared(&normalize_set(&profile.languages), posting)
}

pub fn language_match(profile: &TalentProfile, posting: &JobPosting) -> u8 {
    location_fit(profile, posting).score()
}
