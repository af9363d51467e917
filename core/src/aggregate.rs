use crate::factors::MAX_SCORE;
use crate::model::ScoreBreakdown;

/// Factor weights in whole percent. Integer weights keep the aggregate exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub skills: u32,
    pub readiness: u32,
    pub language: u32,
}

pub const WEIGHTS: Weights = Weights {
    skills: 50,
    readiness: 30,
    language: 20,
};

impl Weights {
    pub fn sum(&self) -> u32 {
        self.skills + self.readiness + self.language
    }

    /// `round(Σ weight·factor / Σ weight)`, halves rounded up, clamped to [0, 100].
    pub fn combine(&self, breakdown: &ScoreBreakdown) -> u8 {
        let total = self.sum().max(1);
        let weighted = self.skills * u32::from(breakdown.skills_overlap)
            + self.readiness * u32::from(breakdown.readiness)
            + self.language * u32::from(breakdown.language_match);
        let rounded = (2 * weighted + total) / (2 * total);
        rounded.min(u32::from(MAX_SCORE)) as u8
    }
}

pub fn aggregate(breakdown: &ScoreBreakdown) -> u8 {
    WEIGHTS.combine(breakdown)
}
