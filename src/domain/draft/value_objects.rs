use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Estimated reading time in whole minutes, bounded the same way the editor's
/// number input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReadTime(u32);

impl ReadTime {
    pub const MIN_MINUTES: u32 = 1;
    pub const MAX_MINUTES: u32 = 60;

    /// # Errors
    ///
    /// Rejects minute counts outside `MIN_MINUTES..=MAX_MINUTES`.
    pub fn new(minutes: u32) -> DomainResult<Self> {
        if !(Self::MIN_MINUTES..=Self::MAX_MINUTES).contains(&minutes) {
            return Err(DomainError::Validation(format!(
                "read time must be between {} and {} minutes",
                Self::MIN_MINUTES,
                Self::MAX_MINUTES
            )));
        }
        Ok(Self(minutes))
    }

    /// Clamp an arbitrary minute count into the accepted bounds.
    #[must_use]
    pub fn saturating(minutes: u32) -> Self {
        Self(minutes.clamp(Self::MIN_MINUTES, Self::MAX_MINUTES))
    }

    #[must_use]
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ReadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.0)
    }
}
