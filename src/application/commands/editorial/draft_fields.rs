// src/application/commands/editorial/draft_fields.rs
use crate::{
    application::error::ApplicationResult,
    domain::draft::{Draft, KeywordList, ReadTime},
};
use chrono::NaiveDate;

/// Raw editor field values as they arrive from the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct DraftFields {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub meta_description: Option<String>,
    pub banner_image: Option<String>,
    pub keywords: Vec<String>,
    pub read_time: Option<u32>,
    pub author: Option<String>,
    pub slug: Option<String>,
    pub date: Option<NaiveDate>,
    pub published: bool,
}

impl DraftFields {
    /// Conversion used for scoring: an out-of-range read time is clamped
    /// because it is never scored and must not block evaluation.
    pub(super) fn into_draft_lenient(self) -> Draft {
        let read_time = self.read_time.map(ReadTime::saturating);
        self.into_draft_with(read_time)
    }

    pub(super) fn into_draft(self) -> ApplicationResult<Draft> {
        let read_time = self.read_time.map(ReadTime::new).transpose()?;
        Ok(self.into_draft_with(read_time))
    }

    /// Keywords are replayed through [`KeywordList`] so blank and duplicate
    /// chips never reach the evaluator.
    fn into_draft_with(self, read_time: Option<ReadTime>) -> Draft {
        let keywords = KeywordList::from_raw(&self.keywords).into_inner();
        Draft {
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            meta_description: self.meta_description,
            banner_image: self.banner_image,
            keywords,
            read_time,
            author: self.author,
            slug: self.slug,
            date: self.date,
            published: self.published,
        }
    }
}
