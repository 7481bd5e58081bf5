// src/application/queries/editorial/rules.rs
use super::EditorialQueryService;
use crate::application::dto::ScoringRulesDto;

impl EditorialQueryService {
    pub fn scoring_rules(&self) -> ScoringRulesDto {
        ScoringRulesDto::from(self.evaluator.as_ref())
    }
}
