// src/domain/draft/services.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;

/// Domain service responsible for deriving URL slugs for drafts.
pub struct DraftSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl DraftSlugService {
    #[must_use]
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Slug for `title`, or a timestamped placeholder when the title has no
    /// sluggable characters.
    #[must_use]
    pub fn slug_for_title(&self, title: &str, now: DateTime<Utc>) -> String {
        let base = self.generator.slugify(title);
        if base.is_empty() {
            format!("post-{}", now.timestamp())
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DashSlug;

    impl SlugGenerator for DashSlug {
        fn slugify(&self, input: &str) -> String {
            input
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join("-")
        }
    }

    #[test]
    fn slug_comes_from_generator() {
        let service = DraftSlugService::new(Arc::new(DashSlug));
        assert_eq!(
            service.slug_for_title("Getting Started With React", Utc::now()),
            "getting-started-with-react"
        );
    }

    #[test]
    fn empty_slug_falls_back_to_timestamp() {
        let service = DraftSlugService::new(Arc::new(DashSlug));
        let now = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(service.slug_for_title("   ", now), "post-1704067200");
    }
}
