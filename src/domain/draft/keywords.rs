use crate::domain::errors::{DomainError, DomainResult};

/// Ordered keyword chips attached to a draft. The first entry is the primary
/// keyword.
///
/// Entries are trimmed on insertion; blank input and exact duplicates are
/// ignored so the list never contains either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordList(Vec<String>);

impl KeywordList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalise untrusted input by replaying every entry through [`add`](Self::add).
    #[must_use]
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for keyword in raw {
            list.add(keyword.as_ref());
        }
        list
    }

    /// Append a keyword. Returns `false` when the trimmed input was blank or
    /// already present.
    pub fn add(&mut self, raw: &str) -> bool {
        let keyword = raw.trim();
        if keyword.is_empty() || self.0.iter().any(|existing| existing == keyword) {
            return false;
        }
        self.0.push(keyword.to_string());
        true
    }

    /// Remove the chip at `index` and return it.
    ///
    /// # Errors
    ///
    /// Rejects an index past the end of the list; the list is left unchanged.
    pub fn remove(&mut self, index: usize) -> DomainResult<String> {
        if index >= self.0.len() {
            return Err(DomainError::Validation(format!(
                "keyword index {index} is out of range for {} keywords",
                self.0.len()
            )));
        }
        Ok(self.0.remove(index))
    }

    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
