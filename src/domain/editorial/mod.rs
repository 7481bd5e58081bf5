pub mod evaluator;
pub mod result;
pub mod rules;
pub mod thresholds;

pub use evaluator::{EditorialQualityEvaluator, evaluate};
pub use result::{EvaluationResult, RuleCheck, ScoreBand};
pub use rules::RuleId;
pub use thresholds::{InclusiveRange, RuleWeights, ScoringThresholds};
