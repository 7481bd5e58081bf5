// src/domain/editorial/evaluator.rs
use crate::domain::draft::Draft;
use crate::domain::editorial::result::{EvaluationResult, RuleCheck};
use crate::domain::editorial::rules::{Rule, rule_table};
use crate::domain::editorial::thresholds::ScoringThresholds;

const MAX_SCORE: u32 = 100;

/// Scores a draft against the rule table.
///
/// Evaluation is pure: the draft is only read, and an empty draft is a valid
/// input that simply scores zero.
#[derive(Debug, Clone)]
pub struct EditorialQualityEvaluator {
    thresholds: ScoringThresholds,
    rules: Vec<Rule>,
}

impl Default for EditorialQualityEvaluator {
    fn default() -> Self {
        Self::new(ScoringThresholds::default())
    }
}

impl EditorialQualityEvaluator {
    #[must_use]
    pub fn new(thresholds: ScoringThresholds) -> Self {
        Self {
            rules: rule_table(&thresholds),
            thresholds,
        }
    }

    #[must_use]
    pub fn thresholds(&self) -> &ScoringThresholds {
        &self.thresholds
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn evaluate(&self, draft: &Draft) -> EvaluationResult {
        let checks: Vec<RuleCheck> = self
            .rules
            .iter()
            .filter_map(|rule| rule.apply(draft))
            .collect();

        let total: u32 = checks.iter().map(|check| check.points).sum();
        let score = u8::try_from(total.min(MAX_SCORE)).unwrap_or(u8::MAX);
        let issues = checks
            .iter()
            .filter_map(|check| check.issue.clone())
            .collect();

        EvaluationResult {
            score,
            issues,
            checks,
        }
    }
}

/// Evaluate with the default thresholds.
#[must_use]
pub fn evaluate(draft: &Draft) -> EvaluationResult {
    EditorialQualityEvaluator::default().evaluate(draft)
}
