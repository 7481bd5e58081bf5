// src/application/commands/editorial/prepare.rs
use super::{DraftFields, EditorialCommandService};
use crate::{
    application::{
        dto::PreparedDraftDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::draft::text::{estimate_read_time, plain_text, word_count},
};

pub struct PrepareDraftCommand {
    pub draft: DraftFields,
}

impl PrepareDraftCommand {
    pub fn builder() -> PrepareDraftCommandBuilder {
        PrepareDraftCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct PrepareDraftCommandBuilder {
    fields: DraftFields,
}

impl PrepareDraftCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.fields.title = title.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.fields.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.fields.content = content.into();
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.fields.keywords.push(keyword.into());
        self
    }

    pub fn banner_image(mut self, url: impl Into<String>) -> Self {
        self.fields.banner_image = Some(url.into());
        self
    }

    pub fn read_time(mut self, minutes: u32) -> Self {
        self.fields.read_time = Some(minutes);
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.fields.slug = Some(slug.into());
        self
    }

    pub fn build(self) -> PrepareDraftCommand {
        PrepareDraftCommand {
            draft: self.fields,
        }
    }
}

impl EditorialCommandService {
    /// Fill in every derived field of a draft and attach its evaluation.
    ///
    /// Title and content are the only hard requirements; everything else is
    /// derived or left to the advisory issue list.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank title, content without words, or
    /// a read time outside 1-60 minutes.
    pub fn prepare_draft(&self, command: PrepareDraftCommand) -> ApplicationResult<PreparedDraftDto> {
        let mut draft = command.draft.into_draft()?;

        if draft.title.trim().is_empty() {
            return Err(ApplicationError::validation("title is required"));
        }
        let words = word_count(&plain_text(&draft.content));
        if words == 0 {
            return Err(ApplicationError::validation("content is required"));
        }

        let now = self.clock.now();
        let read_time = draft
            .read_time
            .unwrap_or_else(|| estimate_read_time(words, self.words_per_minute));
        let slug = match draft.slug.take().filter(|slug| !slug.trim().is_empty()) {
            Some(slug) => slug,
            None => self.slug_service.slug_for_title(&draft.title, now),
        };
        let date = draft.date.unwrap_or_else(|| self.clock.today());
        draft.read_time = Some(read_time);
        draft.slug = Some(slug.clone());
        draft.date = Some(date);
        draft.resolve_meta_description();

        let evaluation = self.score(&draft);
        tracing::info!(slug = %slug, score = evaluation.score, "draft prepared");

        Ok(PreparedDraftDto {
            meta_description: draft.meta_description.unwrap_or_default(),
            banner_image: draft.banner_image.filter(|url| !url.is_empty()),
            read_time: read_time.minutes(),
            slug,
            date,
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            keywords: draft.keywords,
            author: draft.author,
            published: draft.published,
            evaluation,
        })
    }
}
