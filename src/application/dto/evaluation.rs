use crate::domain::editorial::{EvaluationResult, RuleCheck, ScoreBand};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBandDto {
    Good,
    Fair,
    Poor,
}

impl From<ScoreBand> for ScoreBandDto {
    fn from(band: ScoreBand) -> Self {
        match band {
            ScoreBand::Good => ScoreBandDto::Good,
            ScoreBand::Fair => ScoreBandDto::Fair,
            ScoreBand::Poor => ScoreBandDto::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleCheckDto {
    pub rule: String,
    pub points: u32,
    pub max_points: u32,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

impl From<RuleCheck> for RuleCheckDto {
    fn from(check: RuleCheck) -> Self {
        Self {
            rule: check.rule.as_str().to_string(),
            points: check.points,
            max_points: check.max_points,
            passed: check.passed(),
            issue: check.issue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDto {
    pub score: u8,
    pub band: ScoreBandDto,
    pub issues: Vec<String>,
    pub checks: Vec<RuleCheckDto>,
    pub word_count: usize,
}

impl EvaluationDto {
    #[must_use]
    pub fn new(result: EvaluationResult, word_count: usize) -> Self {
        Self {
            score: result.score,
            band: result.band().into(),
            issues: result.issues,
            checks: result.checks.into_iter().map(Into::into).collect(),
            word_count,
        }
    }
}
