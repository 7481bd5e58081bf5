use crate::domain::editorial::EditorialQualityEvaluator;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleSummaryDto {
    pub rule: String,
    pub max_points: u32,
}

/// Active thresholds, so the editor can show targets next to each field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRulesDto {
    pub title_min_chars: usize,
    pub title_max_chars: usize,
    pub content_min_words: usize,
    pub content_ideal_words: usize,
    pub meta_description_min_chars: usize,
    pub meta_description_max_chars: usize,
    pub keywords_min: usize,
    pub keywords_max: usize,
    pub max_score: u32,
    pub rules: Vec<RuleSummaryDto>,
}

impl From<&EditorialQualityEvaluator> for ScoringRulesDto {
    fn from(evaluator: &EditorialQualityEvaluator) -> Self {
        let t = evaluator.thresholds();
        let rules: Vec<RuleSummaryDto> = evaluator
            .rules()
            .iter()
            .map(|rule| RuleSummaryDto {
                rule: rule.id.as_str().to_string(),
                max_points: rule.max_points(),
            })
            .collect();

        Self {
            title_min_chars: t.title_chars.min(),
            title_max_chars: t.title_chars.max(),
            content_min_words: t.content_min_words,
            content_ideal_words: t.content_ideal_words,
            meta_description_min_chars: t.meta_description_chars.min(),
            meta_description_max_chars: t.meta_description_chars.max(),
            keywords_min: t.keyword_count.min(),
            keywords_max: t.keyword_count.max(),
            max_score: rules.iter().map(|rule| rule.max_points).sum::<u32>().min(100),
            rules,
        }
    }
}
