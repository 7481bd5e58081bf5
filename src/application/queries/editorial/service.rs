// src/application/queries/editorial/service.rs
use std::sync::Arc;

use crate::domain::editorial::EditorialQualityEvaluator;

pub struct EditorialQueryService {
    pub(super) evaluator: Arc<EditorialQualityEvaluator>,
}

impl EditorialQueryService {
    pub fn new(evaluator: Arc<EditorialQualityEvaluator>) -> Self {
        Self { evaluator }
    }
}
