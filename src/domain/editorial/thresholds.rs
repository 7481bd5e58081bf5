// src/domain/editorial/thresholds.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

/// Closed interval `[min, max]` over a measured quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InclusiveRange {
    min: usize,
    max: usize,
}

impl InclusiveRange {
    /// # Errors
    ///
    /// Rejects a lower bound above the upper bound.
    pub fn new(min: usize, max: usize) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::Validation(format!(
                "range lower bound {min} exceeds upper bound {max}"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    #[must_use]
    pub fn contains(&self, value: usize) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for InclusiveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Parses `"40-60"`.
impl FromStr for InclusiveRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::Validation(format!("expected a range like 40-60, got {s:?}"));
        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        let min = min.trim().parse().map_err(|_| invalid())?;
        let max = max.trim().parse().map_err(|_| invalid())?;
        Self::new(min, max)
    }
}

/// Points awarded per rule band. The defaults add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleWeights {
    pub title_ideal: u32,
    pub title_present: u32,
    pub content_ideal: u32,
    pub content_good: u32,
    pub content_short: u32,
    pub meta_ideal: u32,
    pub meta_present: u32,
    pub banner_image: u32,
    pub keywords_ideal: u32,
    pub keywords_present: u32,
    pub keyword_in_title: u32,
    pub keyword_in_content: u32,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            title_ideal: 20,
            title_present: 10,
            content_ideal: 30,
            content_good: 20,
            content_short: 10,
            meta_ideal: 15,
            meta_present: 5,
            banner_image: 10,
            keywords_ideal: 15,
            keywords_present: 5,
            keyword_in_title: 5,
            keyword_in_content: 5,
        }
    }
}

/// Band boundaries for the scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringThresholds {
    pub title_chars: InclusiveRange,
    pub content_min_words: usize,
    pub content_ideal_words: usize,
    pub meta_description_chars: InclusiveRange,
    pub keyword_count: InclusiveRange,
    pub weights: RuleWeights,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            title_chars: InclusiveRange { min: 40, max: 60 },
            content_min_words: 300,
            content_ideal_words: 800,
            meta_description_chars: InclusiveRange { min: 120, max: 160 },
            keyword_count: InclusiveRange { min: 3, max: 8 },
            weights: RuleWeights::default(),
        }
    }
}

impl ScoringThresholds {
    /// # Errors
    ///
    /// Rejects a zero minimum word count or a minimum above the ideal count.
    pub fn validate(&self) -> DomainResult<()> {
        if self.content_min_words == 0 {
            return Err(DomainError::Validation(
                "minimum content word count must be positive".into(),
            ));
        }
        if self.content_min_words > self.content_ideal_words {
            return Err(DomainError::Validation(format!(
                "minimum content word count {} exceeds ideal word count {}",
                self.content_min_words, self.content_ideal_words
            )));
        }
        Ok(())
    }
}
