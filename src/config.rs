// src/config.rs
use crate::domain::editorial::{InclusiveRange, ScoringThresholds};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    rate_limit: Option<RateLimit>,
    words_per_minute: u32,
    thresholds: ScoringThresholds,
}

/// Per-client request budget for the scoring endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    pub per_second: u64,
    pub burst: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn default_words_per_minute() -> u32 {
    200
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and rejects malformed ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for any malformed or inconsistent value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let rate_limit_enabled = lookup("RATE_LIMIT_ENABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);
        let rate_limit = if rate_limit_enabled {
            Some(RateLimit {
                per_second: parse_positive(&lookup, "RATE_LIMIT_PER_SECOND")?.unwrap_or(10),
                burst: parse_positive(&lookup, "RATE_LIMIT_BURST")?.unwrap_or(20),
            })
        } else {
            None
        };

        let words_per_minute =
            parse_positive(&lookup, "WORDS_PER_MINUTE")?.unwrap_or_else(default_words_per_minute);

        let thresholds = thresholds_from(&lookup)?;

        Ok(Self {
            listen_addr,
            allowed_origins,
            rate_limit,
            words_per_minute,
            thresholds,
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    #[must_use]
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// `None` when rate limiting is switched off.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit
    }

    #[must_use]
    pub fn words_per_minute(&self) -> u32 {
        self.words_per_minute
    }

    #[must_use]
    pub fn thresholds(&self) -> ScoringThresholds {
        self.thresholds
    }
}

fn thresholds_from<F>(lookup: &F) -> Result<ScoringThresholds, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut thresholds = ScoringThresholds::default();

    if let Some(range) = parse_range(lookup, "SEO_TITLE_RANGE")? {
        thresholds.title_chars = range;
    }
    if let Some(range) = parse_range(lookup, "SEO_META_RANGE")? {
        thresholds.meta_description_chars = range;
    }
    if let Some(range) = parse_range(lookup, "SEO_KEYWORD_RANGE")? {
        thresholds.keyword_count = range;
    }
    if let Some(words) = parse_positive(lookup, "SEO_CONTENT_MIN_WORDS")? {
        thresholds.content_min_words = words;
    }
    if let Some(words) = parse_positive(lookup, "SEO_CONTENT_IDEAL_WORDS")? {
        thresholds.content_ideal_words = words;
    }

    thresholds
        .validate()
        .map_err(|err| ConfigError::Invalid(err.to_string()))?;
    Ok(thresholds)
}

fn parse_positive<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(Some(value)),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}

fn parse_range<F>(lookup: &F, key: &'static str) -> Result<Option<InclusiveRange>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.parse::<InclusiveRange>()
                .map_err(|err| ConfigError::Invalid(format!("{key}: {err}")))
        })
        .transpose()
}
