// src/application/commands/editorial/keywords.rs
use super::EditorialCommandService;
use crate::{application::error::ApplicationResult, domain::draft::KeywordList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordEdit {
    Add(String),
    Remove(usize),
}

pub struct EditKeywordsCommand {
    pub keywords: Vec<String>,
    pub edit: KeywordEdit,
}

impl EditorialCommandService {
    /// Apply one chip edit to a normalised copy of the keyword list.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the removal index is out of range.
    pub fn edit_keywords(&self, command: EditKeywordsCommand) -> ApplicationResult<Vec<String>> {
        let mut keywords = KeywordList::from_raw(&command.keywords);
        match command.edit {
            KeywordEdit::Add(keyword) => {
                if !keywords.add(&keyword) {
                    tracing::debug!(keyword = %keyword, "keyword ignored");
                }
            }
            KeywordEdit::Remove(index) => {
                keywords.remove(index)?;
            }
        }
        Ok(keywords.into_inner())
    }
}
