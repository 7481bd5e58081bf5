// src/domain/draft/entity.rs
use crate::domain::draft::value_objects::ReadTime;
use chrono::NaiveDate;

/// The in-progress post record the editor works on.
///
/// Fields are kept as raw editor values: an empty title or missing banner is
/// a legitimate state for a draft and only shows up as advisory issues when
/// the draft is scored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub meta_description: Option<String>,
    pub banner_image: Option<String>,
    pub keywords: Vec<String>,
    pub read_time: Option<ReadTime>,
    pub author: Option<String>,
    pub slug: Option<String>,
    pub date: Option<NaiveDate>,
    pub published: bool,
}

impl Draft {
    #[must_use]
    pub fn primary_keyword(&self) -> Option<&str> {
        self.keywords.first().map(String::as_str)
    }

    /// Meta description as scored: the explicit value, or the excerpt when
    /// the explicit value is absent or blank.
    #[must_use]
    pub fn effective_meta_description(&self) -> &str {
        match self.meta_description.as_deref() {
            Some(meta) if !meta.trim().is_empty() => meta,
            _ => &self.excerpt,
        }
    }

    pub fn resolve_meta_description(&mut self) {
        let resolved = self.effective_meta_description().to_string();
        self.meta_description = Some(resolved);
    }
}
