// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::editorial::EditorialCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::editorial::EditorialQueryService,
    },
    domain::{
        draft::services::DraftSlugService,
        editorial::{EditorialQualityEvaluator, ScoringThresholds},
    },
};

pub struct ApplicationServices {
    pub editorial_commands: Arc<EditorialCommandService>,
    pub editorial_queries: Arc<EditorialQueryService>,
}

impl ApplicationServices {
    pub fn new(
        thresholds: ScoringThresholds,
        words_per_minute: u32,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let evaluator = Arc::new(EditorialQualityEvaluator::new(thresholds));
        let slug_service = Arc::new(DraftSlugService::new(Arc::clone(&slugger)));

        let editorial_commands = Arc::new(EditorialCommandService::new(
            Arc::clone(&evaluator),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            words_per_minute,
        ));
        let editorial_queries = Arc::new(EditorialQueryService::new(Arc::clone(&evaluator)));

        Self {
            editorial_commands,
            editorial_queries,
        }
    }
}
