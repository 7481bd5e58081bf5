pub mod drafts;
pub mod evaluation;
pub mod rules;

pub use drafts::PreparedDraftDto;
pub use evaluation::{EvaluationDto, RuleCheckDto, ScoreBandDto};
pub use rules::{RuleSummaryDto, ScoringRulesDto};
