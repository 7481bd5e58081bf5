// src/application/commands/editorial/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{draft::services::DraftSlugService, editorial::EditorialQualityEvaluator},
};

pub struct EditorialCommandService {
    pub(super) evaluator: Arc<EditorialQualityEvaluator>,
    pub(super) slug_service: Arc<DraftSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) words_per_minute: u32,
}

impl EditorialCommandService {
    pub fn new(
        evaluator: Arc<EditorialQualityEvaluator>,
        slug_service: Arc<DraftSlugService>,
        clock: Arc<dyn Clock>,
        words_per_minute: u32,
    ) -> Self {
        Self {
            evaluator,
            slug_service,
            clock,
            words_per_minute,
        }
    }
}
