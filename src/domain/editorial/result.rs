// src/domain/editorial/result.rs
use crate::domain::editorial::rules::RuleId;

/// Outcome of one rule that applied to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCheck {
    pub rule: RuleId,
    pub points: u32,
    pub max_points: u32,
    pub issue: Option<String>,
}

impl RuleCheck {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.issue.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// Sum of rule points, clamped to `0..=100`.
    pub score: u8,
    pub issues: Vec<String>,
    pub checks: Vec<RuleCheck>,
}

impl EvaluationResult {
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Colour band the editor's progress indicator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub const GOOD_FROM: u8 = 70;
    pub const FAIR_FROM: u8 = 40;

    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= Self::GOOD_FROM {
            ScoreBand::Good
        } else if score >= Self::FAIR_FROM {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}
