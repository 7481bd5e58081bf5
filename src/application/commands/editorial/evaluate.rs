// src/application/commands/editorial/evaluate.rs
use super::{DraftFields, EditorialCommandService};
use crate::{
    application::dto::EvaluationDto,
    domain::draft::{
        Draft,
        text::{plain_text, word_count},
    },
};

pub struct EvaluateDraftCommand {
    pub draft: DraftFields,
}

impl EditorialCommandService {
    /// Score the editor's current field values. Never fails.
    pub fn evaluate_draft(&self, command: EvaluateDraftCommand) -> EvaluationDto {
        let draft = command.draft.into_draft_lenient();
        let evaluation = self.score(&draft);
        tracing::debug!(
            score = evaluation.score,
            issues = evaluation.issues.len(),
            "draft evaluated"
        );
        evaluation
    }

    /// Resolve the caller-side fallbacks (meta description from excerpt,
    /// rich content to plain text) and run the evaluator on the result.
    pub(super) fn score(&self, draft: &Draft) -> EvaluationDto {
        let mut scored = draft.clone();
        scored.resolve_meta_description();
        scored.content = plain_text(&draft.content);

        let words = word_count(&scored.content);
        EvaluationDto::new(self.evaluator.evaluate(&scored), words)
    }
}
